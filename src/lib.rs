//! id3stat - reports MP3 files that are missing an ID3v1 tag
//!
//! This library provides the file-resolution and batch-evaluation pipeline
//! behind the `id3stat` binary. Candidate files come from one of three
//! mutually exclusive input modes (explicit arguments, an encoded list file,
//! or a recursive directory scan), and each MP3 is probed for an ID3v1
//! trailer. Files without the trailer are printed to standard output.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod encoding;
pub mod evaluate;
pub mod listfile;
pub mod output;
pub mod probe;
pub mod resolver;
pub mod walker;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum Id3statError {
    /// Input resolution error
    #[error(transparent)]
    Resolve(#[from] resolver::ResolveError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Id3statError {
    /// Exit status for this failure: usage and configuration errors exit 2,
    /// runtime failures exit 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Resolve(e) if e.is_usage() => 2,
            Self::Config(_) => 2,
            Self::Resolve(_) | Self::Io(_) => 1,
        }
    }
}
