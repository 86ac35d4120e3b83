//! Batch evaluation of candidate files
//!
//! Each candidate is classified by extension, probed for the ID3v1 trailer
//! when supported, and tallied. The path of every untagged file goes to the
//! primary output stream; per-file diagnostics go to the error stream.
//!
//! Candidates are fully isolated from one another: a failure is reported,
//! counted, and the batch moves on to the next entry. The batch keeps no
//! state between files beyond the two running counters.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::probe;
use crate::walker;

/// Per-candidate failure, reported on the error stream without aborting the batch
#[derive(Debug, Error)]
pub enum CandidateError {
    /// Extension is not the one supported kind
    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedType(PathBuf),

    /// The probe could not open or read the file
    #[error("Cannot read file: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Tag presence for one supported candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Tagged,
    Untagged,
}

/// Success and error tallies for one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Candidates that were probed without error, tagged or not
    pub successes: usize,
    /// Candidates that failed (unsupported type or unreadable)
    pub errors: usize,
}

impl BatchSummary {
    /// Total number of candidates evaluated
    #[must_use]
    pub const fn total(&self) -> usize {
        self.successes + self.errors
    }
}

/// Classify and probe a single candidate.
fn evaluate_one(path: &Path) -> Result<Outcome, CandidateError> {
    if !walker::is_mp3_path(path) {
        return Err(CandidateError::UnsupportedType(path.to_path_buf()));
    }
    match probe::has_id3v1_tag(path) {
        Ok(true) => Ok(Outcome::Tagged),
        Ok(false) => Ok(Outcome::Untagged),
        Err(source) => Err(CandidateError::Unreadable { path: path.to_path_buf(), source }),
    }
}

/// Evaluate every candidate in list order.
///
/// Untagged paths are written to `out` exactly as given, one per line.
/// Diagnostics are written to `err`, one per line. A candidate failure never
/// skips or affects another candidate; it is counted and evaluation
/// continues.
///
/// # Errors
/// Only a write failure on `out` or `err` aborts the batch.
pub fn evaluate_batch<W, E>(
    candidates: &[PathBuf],
    out: &mut W,
    err: &mut E,
) -> io::Result<BatchSummary>
where
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();
    for path in candidates {
        match evaluate_one(path) {
            Ok(Outcome::Tagged) => summary.successes += 1,
            Ok(Outcome::Untagged) => {
                writeln!(out, "{}", path.display())?;
                summary.successes += 1;
            }
            Err(failure) => {
                writeln!(err, "{failure}")?;
                summary.errors += 1;
            }
        }
    }
    Ok(summary)
}
