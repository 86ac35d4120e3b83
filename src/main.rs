//! id3stat CLI application entry point
//!
//! Reports which MP3 files in the input set lack an ID3v1 tag. Candidates
//! come from exactly one of three sources: file arguments, a list file
//! (`--files`, optionally `--encoding`), or a directory scan (`--dir`).
//! The path of every untagged file is printed to standard output; all
//! diagnostics go to standard error.
//!
//! # Usage
//!
//! ```bash
//! # Check files given directly
//! id3stat song1.mp3 song2.mp3
//!
//! # Check every MP3 under a directory tree
//! id3stat --dir ~/music
//!
//! # Check the files named in a Shift_JIS list file
//! id3stat --files playlist.txt --encoding ShiftJIS
//! ```
//!
//! # Exit status
//!
//! - `0`: at least one file was checked without error
//! - `1`: resolution failed, or no file was checked successfully
//! - `2`: invalid configuration (conflicting input modes, no input, bad
//!   encoding, unreadable config file)
//!
//! # Configuration
//!
//! Persistent defaults (`quiet`, `encoding`) are stored in the user's config
//! directory (`~/.config/id3stat/config.toml` on Linux) and are created on
//! first run. Command-line flags take precedence.

use std::io;
use std::process::ExitCode;

use id3stat::{
    Id3statError,
    cli::{self, Cli},
    config::Id3statConfig,
    evaluate::{self, BatchSummary},
    output,
    resolver::InputMode,
};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return ExitCode::SUCCESS;
    }

    if cli.license {
        println!("{}", cli::LICENSE_NOTICE);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(summary) if summary.successes == 0 => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::fatal(&e.to_string()));
            ExitCode::from(e.exit_code())
        }
    }
}

/// Resolve the candidate list and evaluate it against locked stdout/stderr.
///
/// Mode selection validates the whole configuration before any I/O happens,
/// so every usage error is reported before the first file is touched.
fn run(cli: &Cli) -> Result<BatchSummary, Id3statError> {
    let config = Id3statConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    let mode = InputMode::from_config(cli.input_config(config.encoding.as_deref()))?;
    let candidates = mode.resolve()?;

    let summary = evaluate::evaluate_batch(
        &candidates,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if !quiet {
        eprintln!("{}", output::summary_line(&summary));
    }
    Ok(summary)
}
