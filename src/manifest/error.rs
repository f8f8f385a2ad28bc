//! Errors raised while loading, merging and writing manifest files.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Smallest number of positional arguments: two sources and a target.
pub const MIN_ARGUMENTS: usize = 3;

/// MergeError represents a failure of a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("You must pass at least, {min} parameters (got {given})", min = MIN_ARGUMENTS)]
    MissingArguments { given: usize },

    #[error("File {} does not exists.", .path.display())]
    TargetFileMissing { path: PathBuf },

    #[error("{}: malformed JSON: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: expected a JSON object, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize merged manifest: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl MergeError {
    /// Creates a missing arguments error.
    pub fn missing_arguments(given: usize) -> Self {
        MergeError::MissingArguments { given }
    }

    /// Creates a target file missing error.
    pub fn target_file_missing(path: impl AsRef<Path>) -> Self {
        MergeError::TargetFileMissing {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a malformed JSON error.
    pub fn malformed_json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        MergeError::MalformedJson {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a not-an-object error.
    pub fn not_an_object(path: impl AsRef<Path>, found: &'static str) -> Self {
        MergeError::NotAnObject {
            path: path.as_ref().to_path_buf(),
            found,
        }
    }

    /// Creates an I/O error.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        MergeError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if the error only means the command line was incomplete.
    pub fn is_usage(&self) -> bool {
        matches!(self, MergeError::MissingArguments { .. })
    }
}

pub type Result<T, E = MergeError> = std::result::Result<T, E>;
