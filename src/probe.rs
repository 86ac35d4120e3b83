//! ID3v1 tag presence probe
//!
//! The probe answers one question: does this file end in an ID3v1 trailer?
//! It reuses the `id3` crate's v1 reader and collapses its result to a
//! boolean. A file that cannot be opened is a read error; a trailer that is
//! absent or unparsable just means the file is untagged.

use std::fs::File;
use std::io;
use std::path::Path;

/// Report whether `path` carries an ID3v1 trailer.
///
/// # Errors
/// Returns the underlying `io::Error` when the file cannot be opened. Tag
/// parse failures are not errors; they yield `Ok(false)`.
pub fn has_id3v1_tag(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    Ok(id3::v1::Tag::read_from(&mut file).is_ok())
}
