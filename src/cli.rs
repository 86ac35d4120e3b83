//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for id3stat using the `clap` crate.
//! Input sources deliberately carry no `conflicts_with` declarations: mutual
//! exclusivity between `--dir`, `--files`, and file arguments belongs to the
//! input resolver, which validates before any I/O and reports conflicts
//! through its own error taxonomy.
//!
//! # Usage
//!
//! ```bash
//! # Check files given directly
//! id3stat song1.mp3 song2.mp3
//!
//! # Check every MP3 under a directory
//! id3stat --dir ~/music
//!
//! # Check the files named in a list file
//! id3stat --files playlist.txt --encoding ShiftJIS
//! ```

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::resolver::InputConfig;

/// License notice for the --license flag
pub const LICENSE_NOTICE: &str = "\
id3stat
Copyright 2016 Upper Stream Software.

Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this software except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.";

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "id3stat")]
#[command(about = "Reports MP3 files that are missing an ID3v1 tag", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files to check, given directly on the command line
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Check every MP3 file under this directory
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Read the files to check from a list file, one path per line
    #[arg(long = "files", value_name = "LIST")]
    pub list_file: Option<PathBuf>,

    /// Encoding of the list file (UTF-8 or ShiftJIS)
    #[arg(long = "encoding", value_name = "ENCODING")]
    pub encoding: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print the licensing notice and exit
    #[arg(short = 'L', long = "license")]
    pub license: bool,

    /// Generate a shell completion script and exit
    #[arg(long = "completions", value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Fold CLI flags and the configured default into the resolver's input.
    ///
    /// `--encoding` wins over the configured default; with neither set the
    /// tag falls back to `UTF-8`.
    #[must_use]
    pub fn input_config(&self, default_encoding: Option<&str>) -> InputConfig {
        InputConfig {
            dir: self.dir.clone(),
            list_file: self.list_file.clone(),
            encoding_tag: self
                .encoding
                .clone()
                .or_else(|| default_encoding.map(String::from))
                .unwrap_or_else(|| "UTF-8".to_string()),
            args: self.files.clone(),
        }
    }
}

/// Print a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_files() {
        let cli = Cli::parse_from(["id3stat", "a.mp3", "b.mp3"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.mp3"), PathBuf::from("b.mp3")]);
        assert!(cli.dir.is_none());
        assert!(cli.list_file.is_none());
    }

    #[test]
    fn test_parse_dir_flag() {
        let cli = Cli::parse_from(["id3stat", "--dir", "music"]);
        assert_eq!(cli.dir, Some(PathBuf::from("music")));
    }

    #[test]
    fn test_parse_list_file_with_encoding() {
        let cli = Cli::parse_from(["id3stat", "--files", "list.txt", "--encoding", "ShiftJIS"]);
        assert_eq!(cli.list_file, Some(PathBuf::from("list.txt")));
        assert_eq!(cli.encoding.as_deref(), Some("ShiftJIS"));
    }

    #[test]
    fn test_conflicts_are_left_to_the_resolver() {
        // both sources parse fine; the resolver rejects the combination
        let cli = Cli::parse_from(["id3stat", "--dir", "music", "--files", "list.txt"]);
        assert!(cli.dir.is_some());
        assert!(cli.list_file.is_some());
    }

    #[test]
    fn test_encoding_precedence() {
        let cli = Cli::parse_from(["id3stat", "--files", "list.txt", "--encoding", "ShiftJIS"]);
        assert_eq!(cli.input_config(Some("UTF-8")).encoding_tag, "ShiftJIS");

        let cli = Cli::parse_from(["id3stat", "--files", "list.txt"]);
        assert_eq!(cli.input_config(Some("ShiftJIS")).encoding_tag, "ShiftJIS");
        assert_eq!(cli.input_config(None).encoding_tag, "UTF-8");
    }
}
