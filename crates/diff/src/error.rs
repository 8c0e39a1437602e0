//! Error types for diff computation.

use thiserror::Error;

/// Errors returned when a diff request is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// An argument was outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DiffError {
    pub(crate) fn negative_context(context_lines: i64) -> Self {
        DiffError::InvalidArgument(format!(
            "context line count must be non-negative, got {context_lines}"
        ))
    }
}

/// Result type for diff operations.
pub type Result<T> = std::result::Result<T, DiffError>;
