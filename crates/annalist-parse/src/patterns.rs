//! Compiled line patterns.

use regex::Regex;

/// The fixed set of line shapes `git log --stat --summary` emits.
///
/// Compiled once when the parser is constructed and never mutated
/// afterwards.
#[derive(Debug)]
pub(crate) struct Patterns {
    /// `commit <hex-id>` — start of a record.
    pub(crate) header: Regex,
    /// `Author:   <name/email>`.
    pub(crate) author: Regex,
    /// `Date:   <YYYY-MM-DD>`, rest of the line ignored.
    pub(crate) date: Regex,
    /// A message body line: two or more leading whitespace characters.
    pub(crate) message: Regex,
    /// `  <path>  | <change summary>` — one row of the diff-stat table.
    pub(crate) stat: Regex,
    /// `  N files changed...` — the diff-stat trailer. Requires the
    /// literal `files`, so git's singular `1 file changed` does not
    /// match and the mode section is never entered for that commit.
    pub(crate) end_stat: Regex,
    /// `  <verb> mode <digits> <path>` — a `--summary` mode line.
    pub(crate) mode: Regex,
}

impl Patterns {
    pub(crate) fn new() -> Self {
        Self {
            header: Regex::new(r"^commit\s+([0-9a-fA-F]+)").expect("invalid regex"),
            author: Regex::new(r"^Author:\s+(.+)$").expect("invalid regex"),
            date: Regex::new(r"^Date:\s+(\d{4}-\d{2}-\d{2})").expect("invalid regex"),
            message: Regex::new(r"^\s\s+.*$").expect("invalid regex"),
            stat: Regex::new(r"^\s+([^|]+)\s+\|").expect("invalid regex"),
            end_stat: Regex::new(r"^\s+\d+\s+files").expect("invalid regex"),
            mode: Regex::new(r"^\s+[a-z]+\s+mode\s+\d+\s+(.+)$").expect("invalid regex"),
        }
    }
}
