//! ChangeLog entry formatting for Annalist.
//!
//! Renders [`annalist_commit::ChangeRecord`]s as GNU-ChangeLog-style
//! entries: header line, sorted file list, reflowed message body,
//! trailing commit hash.

mod entry;
mod reflow;

pub use entry::{ChangeLogFormatter, DEFAULT_WIDTH};
