//! Parser error types.

use thiserror::Error;

/// Errors raised while scanning the log stream.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line arrived before the first commit header.
    #[error("line outside of any commit: {0}")]
    OrphanLine(String),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
