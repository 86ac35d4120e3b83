//! Text decoding for list files
//!
//! A list file may be written in one of a small set of encodings. This module
//! parses the encoding tag given on the command line and wraps the raw byte
//! stream of the list file into a decoded UTF-8 text reader.
//!
//! # Supported encodings
//!
//! - `""` / `"UTF-8"`: pass-through, no transcoding
//! - `"ShiftJIS"`: transcoded via `encoding_rs`
//!
//! Any other tag is rejected before the list file is opened.

use std::io::{BufRead, BufReader, Read};

use encoding_rs::SHIFT_JIS;
use encoding_rs_io::DecodeReaderBytesBuilder;
use thiserror::Error;

/// Errors produced while selecting a text encoding
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Encoding tag is not one of the recognized set
    #[error("Unsupported encoding: {0}")]
    Unsupported(String),
}

/// Source encoding of a list file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8, read as-is
    #[default]
    Utf8,
    /// Shift_JIS, transcoded to UTF-8 while reading
    ShiftJis,
}

impl TextEncoding {
    /// Parse an encoding tag as given on the command line.
    ///
    /// Accepts exactly `""`/`"UTF-8"` (pass-through) and `"ShiftJIS"`.
    ///
    /// # Errors
    /// Returns `EncodingError::Unsupported` for any other tag.
    pub fn from_tag(tag: &str) -> Result<Self, EncodingError> {
        match tag {
            "" | "UTF-8" => Ok(Self::Utf8),
            "ShiftJIS" => Ok(Self::ShiftJis),
            other => Err(EncodingError::Unsupported(other.to_string())),
        }
    }

    /// Wrap a raw byte source into a buffered UTF-8 text reader.
    ///
    /// Construction never fails. UTF-8 input is passed through untouched, so
    /// invalid byte sequences surface as read errors when a line is consumed.
    /// ShiftJIS input is transcoded with malformed sequences replaced by
    /// U+FFFD, matching the WHATWG decoding behavior.
    #[must_use]
    pub fn wrap<R: Read + 'static>(self, source: R) -> Box<dyn BufRead> {
        match self {
            Self::Utf8 => Box::new(BufReader::new(source)),
            Self::ShiftJis => Box::new(BufReader::new(
                DecodeReaderBytesBuilder::new()
                    .encoding(Some(SHIFT_JIS))
                    .build(source),
            )),
        }
    }
}
