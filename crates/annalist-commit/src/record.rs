//! Commit record and its builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fully parsed commit, ready to be rendered as a ChangeLog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// The commit hash (SHA).
    pub hash: String,

    /// The commit author, exactly as git printed it (name and address).
    pub author: String,

    /// The commit date.
    pub date: NaiveDate,

    /// The raw message body: one line per `\n`, original indentation kept.
    pub message: String,

    /// Changed-file paths in input order. Duplicates are kept.
    pub files: Vec<String>,
}

impl ChangeRecord {
    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}

/// Accumulates an in-progress commit while the log stream is parsed.
///
/// `author` and `date` are set-once fields: the first value wins and
/// later calls are ignored. The builder only yields a [`ChangeRecord`]
/// once both are present.
#[derive(Debug)]
pub struct RecordBuilder {
    hash: String,
    author: Option<String>,
    date: Option<NaiveDate>,
    message: String,
    files: Vec<String>,
}

impl RecordBuilder {
    /// Opens a new record for the given commit hash.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            author: None,
            date: None,
            message: String::new(),
            files: Vec::new(),
        }
    }

    /// Returns the commit hash this record was opened with.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Records the author unless one was already captured.
    pub fn set_author(&mut self, author: impl Into<String>) {
        if self.author.is_none() {
            self.author = Some(author.into());
        }
    }

    /// Records the date unless one was already captured.
    pub fn set_date(&mut self, date: NaiveDate) {
        if self.date.is_none() {
            self.date = Some(date);
        }
    }

    /// Returns true once both author and date have been captured.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.author.is_some() && self.date.is_some()
    }

    /// Returns true once at least one message line has been collected.
    #[must_use]
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    /// Appends one message line verbatim, keeping its indentation.
    pub fn push_message_line(&mut self, line: &str) {
        self.message.push_str(line);
        self.message.push('\n');
    }

    /// Appends one changed-file path.
    pub fn push_file(&mut self, path: impl Into<String>) {
        self.files.push(path.into());
    }

    /// Completes the record.
    ///
    /// Returns `None` when the author or the date was never seen; such a
    /// partial record is not renderable and is dropped by the caller.
    #[must_use]
    pub fn finish(self) -> Option<ChangeRecord> {
        Some(ChangeRecord {
            hash: self.hash,
            author: self.author?,
            date: self.date?,
            message: self.message,
            files: self.files,
        })
    }
}
