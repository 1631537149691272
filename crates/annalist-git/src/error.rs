//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` executable could not be started.
    #[error("failed to spawn git: {0}")]
    Spawn(std::io::Error),

    /// The subprocess stdout pipe was not available.
    #[error("git stdout pipe unavailable")]
    Pipe,

    /// git exited with a failure status.
    #[error("git log failed with {0}")]
    CommandFailed(std::process::ExitStatus),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
