//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Parse error.
    #[error("parse error: {0}")]
    Parse(#[from] annalist_parse::ParseError),

    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] annalist_git::GitError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
