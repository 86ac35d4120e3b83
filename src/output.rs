//! Output formatting for CLI display
//!
//! The primary output stream carries only untagged file paths, so everything
//! else (fatal errors, the batch summary) is formatted here for stderr.

use colored::Colorize;

use crate::evaluate::BatchSummary;

/// Render a fatal error for stderr.
///
/// Colorized when attached to a terminal; the `colored` crate handles tty
/// detection and `NO_COLOR`.
#[must_use]
pub fn fatal(message: &str) -> String {
    message.red().to_string()
}

/// One-line batch summary for non-quiet runs
#[must_use]
pub fn summary_line(summary: &BatchSummary) -> String {
    format!(
        "{} file(s) checked: {} ok, {} error(s)",
        summary.total(),
        summary.successes,
        summary.errors
    )
}
