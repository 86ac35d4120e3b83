//! Testing utilities for id3stat
//!
//! Helpers for building fixture files: fake MP3s with and without an ID3v1
//! trailer, and raw byte files for list-file and walker tests. Tests pair
//! these with `tempfile::tempdir` so nothing leaks outside the test tree.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Byte length of an ID3v1 trailer
pub const ID3V1_LEN: usize = 128;

/// Build a minimal ID3v1 trailer: the "TAG" magic followed by zeroed fields.
#[must_use]
pub fn id3v1_trailer() -> Vec<u8> {
    let mut trailer = vec![0u8; ID3V1_LEN];
    trailer[..3].copy_from_slice(b"TAG");
    trailer
}

/// Write raw bytes to a file, creating it if needed.
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)
}

/// Create a fake MP3 file carrying an ID3v1 trailer.
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_tagged_mp3(path: &Path) -> std::io::Result<()> {
    let mut content = vec![0u8; 64];
    content.extend_from_slice(&id3v1_trailer());
    write_file(path, &content)
}

/// Create a fake MP3 file with no trailer.
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn create_untagged_mp3(path: &Path) -> std::io::Result<()> {
    write_file(path, &[0u8; 64])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_trailer_shape() {
        let trailer = id3v1_trailer();
        assert_eq!(trailer.len(), ID3V1_LEN);
        assert_eq!(&trailer[..3], b"TAG");
    }

    #[test]
    fn test_tagged_fixture_ends_in_trailer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.mp3");
        create_tagged_mp3(&path).unwrap();

        let content = std::fs::read(&path).unwrap();
        assert_eq!(&content[content.len() - ID3V1_LEN..][..3], b"TAG");
    }

    #[test]
    fn test_untagged_fixture_has_no_trailer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixture.mp3");
        create_untagged_mp3(&path).unwrap();

        let content = std::fs::read(&path).unwrap();
        assert!(content.len() < ID3V1_LEN || &content[content.len() - ID3V1_LEN..][..3] != b"TAG");
    }
}
