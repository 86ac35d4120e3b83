//! Input mode resolution
//!
//! Candidate files come from exactly one of three sources: a directory scan,
//! an encoded list file, or paths given directly on the command line. Mode
//! selection and validation happen up front, before any file or directory is
//! touched, so a conflicting or empty configuration never starts I/O.

use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::{EncodingError, TextEncoding};
use crate::listfile::{self, ListError};
use crate::walker::{self, WalkError};

/// Errors produced while selecting or resolving the input mode
#[derive(Debug, Error)]
pub enum ResolveError {
    /// More than one input source was requested
    #[error("You cannot specify {0} and {1} at the same time")]
    ConflictingModes(&'static str, &'static str),

    /// No directory, list file, or file arguments were given
    #[error("No input files specified")]
    NoInputSpecified,

    /// Encoding tag was not one of the recognized set
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Directory traversal failed
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// List file parsing failed
    #[error(transparent)]
    List(#[from] ListError),
}

impl ResolveError {
    /// True for configuration mistakes caught before any I/O.
    ///
    /// The binary maps these to the usage-error exit status; everything else
    /// is a runtime failure.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::ConflictingModes(..) | Self::NoInputSpecified | Self::Encoding(_)
        )
    }
}

/// Raw input configuration, as collected from flags and defaults
#[derive(Debug, Default, Clone)]
pub struct InputConfig {
    /// Directory to scan for MP3 files
    pub dir: Option<PathBuf>,
    /// List file naming the candidates, one per line
    pub list_file: Option<PathBuf>,
    /// Encoding tag for the list file
    pub encoding_tag: String,
    /// Candidates given directly as arguments
    pub args: Vec<PathBuf>,
}

/// The one active input source for an invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Scan a directory tree for MP3 files
    Directory(PathBuf),
    /// Read candidate paths from an encoded list file
    ListFile { path: PathBuf, encoding: TextEncoding },
    /// Use the paths given on the command line
    Arguments(Vec<PathBuf>),
}

impl InputMode {
    /// Select exactly one input mode from the configuration.
    ///
    /// The encoding tag is parsed here as well, so every configuration error
    /// is caught before `resolve` performs any I/O.
    ///
    /// # Errors
    /// * Returns `ResolveError::ConflictingModes` when two or more sources
    ///   are set.
    /// * Returns `ResolveError::NoInputSpecified` when none are.
    /// * Returns `ResolveError::Encoding` for an unrecognized encoding tag.
    pub fn from_config(config: InputConfig) -> Result<Self, ResolveError> {
        let InputConfig { dir, list_file, encoding_tag, args } = config;
        let encoding = TextEncoding::from_tag(&encoding_tag)?;

        match (dir, list_file) {
            (Some(_), Some(_)) => {
                Err(ResolveError::ConflictingModes("--files", "--dir"))
            }
            (Some(dir), None) => {
                if args.is_empty() {
                    Ok(Self::Directory(dir))
                } else {
                    Err(ResolveError::ConflictingModes("--dir", "file arguments"))
                }
            }
            (None, Some(path)) => {
                if args.is_empty() {
                    Ok(Self::ListFile { path, encoding })
                } else {
                    Err(ResolveError::ConflictingModes("--files", "file arguments"))
                }
            }
            (None, None) if !args.is_empty() => Ok(Self::Arguments(args)),
            (None, None) => Err(ResolveError::NoInputSpecified),
        }
    }

    /// Produce the final ordered candidate list for this mode.
    ///
    /// # Errors
    /// Propagates `WalkError` from a directory scan and `ListError` from
    /// list-file parsing. Argument mode cannot fail.
    pub fn resolve(self) -> Result<Vec<PathBuf>, ResolveError> {
        match self {
            Self::Directory(root) => Ok(walker::find_mp3_files(&root)?),
            Self::ListFile { path, encoding } => Ok(listfile::parse_list_file(&path, encoding)?),
            Self::Arguments(args) => Ok(args),
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
