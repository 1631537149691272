//! Commit record types for Annalist.
//!
//! This crate provides the record types shared by the parser and the
//! formatter:
//! - [`ChangeRecord`]: a completed, well-formed commit
//! - [`RecordBuilder`]: a commit still being assembled from the log stream

mod record;

pub use record::{ChangeRecord, RecordBuilder};
