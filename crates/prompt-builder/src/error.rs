//! Error types for prompt building.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading inputs or building a prompt.
#[derive(Error, Debug)]
pub enum BuildError {
    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The diff request was rejected.
    #[error(transparent)]
    Diff(#[from] line_diff::DiffError),
}

/// Result type for prompt building.
pub type Result<T> = std::result::Result<T, BuildError>;
