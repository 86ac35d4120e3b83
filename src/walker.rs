//! Breadth-first discovery of MP3 files
//!
//! Given a root directory, the walker expands one directory level at a time:
//! every directory in the current frontier is listed, subdirectories feed the
//! next frontier, and matching files accumulate in discovery order. The
//! frontier loop keeps the traversal free of recursion depth limits.
//!
//! Any directory that cannot be listed, or entry that cannot be inspected,
//! aborts the whole traversal. Partial results are never returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The one file extension this tool targets, matched case-insensitively
const MP3_EXTENSION: &str = "mp3";

/// Errors produced while traversing a directory tree
#[derive(Debug, Error)]
pub enum WalkError {
    /// Root path does not exist
    #[error("No such directory: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory listing or entry inspection failed mid-traversal
    #[error("Cannot read directory entry '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check whether a path carries the `.mp3` extension, case-insensitively.
#[must_use]
pub fn is_mp3_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MP3_EXTENSION))
}

/// Collect every `.mp3` file under `root`, breadth-first.
///
/// The result covers all depths. Order within one directory level is whatever
/// the OS enumeration yields; levels are visited shallow to deep.
///
/// # Errors
/// * Returns `WalkError::RootNotFound` if `root` does not exist.
/// * Returns `WalkError::NotADirectory` if `root` is not a directory.
/// * Returns `WalkError::ReadDir` if any directory cannot be listed or any
///   entry cannot be inspected. The traversal stops at the first failure.
pub fn find_mp3_files(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    let meta = fs::metadata(root).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WalkError::RootNotFound(root.to_path_buf())
        } else {
            WalkError::ReadDir { path: root.to_path_buf(), source }
        }
    })?;
    if !meta.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let mut frontier = vec![root.to_path_buf()];
    while !frontier.is_empty() {
        let mut next_level = Vec::new();
        for dir in &frontier {
            expand(dir, &mut next_level, &mut files)?;
        }
        frontier = next_level;
    }
    Ok(files)
}

/// List one directory, routing subdirectories to the next frontier and
/// matching files to the result list.
fn expand(dir: &Path, dirs: &mut Vec<PathBuf>, files: &mut Vec<PathBuf>) -> Result<(), WalkError> {
    let entries = fs::read_dir(dir).map_err(|source| WalkError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| WalkError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        // stat follows symlinks, so a linked directory is expanded like any other
        let meta = fs::metadata(&path).map_err(|source| WalkError::ReadDir {
            path: path.clone(),
            source,
        })?;
        if meta.is_dir() {
            dirs.push(path);
        } else if is_mp3_path(&path) {
            files.push(path);
        }
    }
    Ok(())
}
