use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a walk. One nominal kind: callers react to the walk
/// failing, not to which stage failed. The variants exist so the
/// diagnostic names the stage, the path, and the underlying cause.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Listing a directory's entries failed (missing, not a directory,
    /// permission denied, or any other I/O error).
    #[error("Failed to list directory '{}': {}", .path.display(), .source)]
    Listing { path: PathBuf, source: io::Error },

    /// Classifying an entry (the stat before the recurse-or-process
    /// decision) failed.
    #[error("Failed to classify entry '{}': {}", .path.display(), .source)]
    Classify { path: PathBuf, source: io::Error },

    /// The per-file processor rejected a file. `reason` carries the
    /// processor's full error chain.
    #[error("Failed to process file '{}': {}", .path.display(), .reason)]
    Process { path: PathBuf, reason: String },

    /// A traversal task did not run to completion, e.g. a panic inside
    /// a processor implementation.
    #[error("Walk task for '{}' did not finish: {}", .path.display(), .reason)]
    Aborted { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, WalkError>;
