//! Git subprocess layer for Annalist.
//!
//! This crate spawns the fixed `git log` invocation and hands its
//! stdout back as a line-buffered stream. It does not interpret the
//! output; that is the parser's job.

mod error;
mod log_stream;

pub use error::{GitError, GitResult};
pub use log_stream::{LogCommand, LogStream};
