//! List file parsing
//!
//! A list file names one candidate path per line. Lines may be bare paths or
//! double-quoted strings; quoting is the way to include paths with leading or
//! trailing whitespace. Lines are yielded in file order, and the file handle
//! is scoped to the parsing call.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::encoding::{EncodingError, TextEncoding};

/// Errors produced while parsing a list file
#[derive(Debug, Error)]
pub enum ListError {
    /// List file could not be opened
    #[error("List file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Encoding tag was not one of the recognized set
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Read failure while scanning lines (including undecodable UTF-8)
    #[error("Error reading list file: {0}")]
    Io(#[from] io::Error),
}

/// Parse a list file into an ordered sequence of candidate paths.
///
/// The file is decoded according to `encoding` and read line-by-line. Empty
/// lines are skipped. A line that is a well-formed double-quoted string is
/// unquoted; any other line is used verbatim.
///
/// # Errors
/// * Returns `ListError::NotFound` if the file cannot be opened.
/// * Returns `ListError::Io` if a line cannot be read or decoded.
pub fn parse_list_file(path: &Path, encoding: TextEncoding) -> Result<Vec<PathBuf>, ListError> {
    let file = File::open(path).map_err(|_| ListError::NotFound(path.to_path_buf()))?;
    let reader = encoding.wrap(file);

    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match unquote(&line) {
            Some(unquoted) => files.push(PathBuf::from(unquoted)),
            None => files.push(PathBuf::from(line)),
        }
    }
    Ok(files)
}

/// Unquote a double-quoted line.
///
/// Returns `None` when the line is not a well-formed quoted string, in which
/// case the caller falls back to the raw line. Recognized escapes are the
/// usual backslash set; an unknown escape or a bare interior quote makes the
/// line malformed.
fn unquote(line: &str) -> Option<String> {
    let inner = line.strip_prefix('"')?.strip_suffix('"')?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                '0' => out.push('\0'),
                '\\' => out.push('\\'),
                '\'' => out.push('\''),
                '"' => out.push('"'),
                _ => return None,
            },
            _ => out.push(c),
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_unquote_plain() {
        assert_eq!(unquote("\"file with spaces.mp3\"").unwrap(), "file with spaces.mp3");
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote(r#""a\"b\\c.mp3""#).unwrap(), "a\"b\\c.mp3");
        assert_eq!(unquote(r#""tab\there.mp3""#).unwrap(), "tab\there.mp3");
    }

    #[test]
    fn test_unquote_rejects_malformed() {
        assert!(unquote("no quotes.mp3").is_none());
        assert!(unquote("\"unterminated.mp3").is_none());
        assert!(unquote("\"inner\"quote.mp3\"").is_none());
        assert!(unquote(r#""bad\escape.mp3""#).is_none());
        assert!(unquote("\"").is_none());
        assert!(unquote("\"trailing backslash\\").is_none());
    }

    #[test]
    fn test_parse_mixed_lines() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("files.txt");
        write_file(&list, b"file1.mp3\nfile2.mp3\n\"file with spaces.mp3\"\n").unwrap();

        let files = parse_list_file(&list, TextEncoding::Utf8).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("file1.mp3"),
                PathBuf::from("file2.mp3"),
                PathBuf::from("file with spaces.mp3"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("files.txt");
        write_file(&list, b"file1.mp3\n\nfile2.mp3\n\n").unwrap();

        let files = parse_list_file(&list, TextEncoding::Utf8).unwrap();
        assert_eq!(files, vec![PathBuf::from("file1.mp3"), PathBuf::from("file2.mp3")]);
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no_such_list.txt");

        let err = parse_list_file(&missing, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, ListError::NotFound(_)));
    }

    #[test]
    fn test_parse_shiftjis_list() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("files.txt");
        // "日本語.mp3" in Shift_JIS, then an ASCII line
        let mut content = vec![0x93, 0xfa, 0x96, 0x7b, 0x8c, 0xea];
        content.extend_from_slice(b".mp3\nplain.mp3\n");
        write_file(&list, &content).unwrap();

        let files = parse_list_file(&list, TextEncoding::ShiftJis).unwrap();
        assert_eq!(files, vec![PathBuf::from("日本語.mp3"), PathBuf::from("plain.mp3")]);
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("files.txt");
        write_file(&list, b"z.mp3\na.mp3\nm.mp3\n").unwrap();

        let files = parse_list_file(&list, TextEncoding::Utf8).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("z.mp3"), PathBuf::from("a.mp3"), PathBuf::from("m.mp3")]
        );
    }
}
