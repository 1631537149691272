//! ChangeLog entry rendering.

use std::fmt::Write;

use annalist_commit::ChangeRecord;
use regex::Regex;

use crate::reflow;

/// Default wrap width for message bodies.
pub const DEFAULT_WIDTH: usize = 70;

/// Renders [`ChangeRecord`]s as GNU-ChangeLog-style entries.
///
/// Rendering has no failure modes: a well-formed record always produces
/// a complete entry string.
pub struct ChangeLogFormatter {
    width: usize,
    magic_prefix: Regex,
}

impl ChangeLogFormatter {
    /// Creates a formatter with the default wrap width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            // A wrapped line opening with parentheses would be taken for
            // a function-name annotation by ChangeLog tooling.
            magic_prefix: Regex::new(r"^\s*\(+").expect("invalid regex"),
        }
    }

    /// Overrides the wrap width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders one record as a complete entry, trailing blank line
    /// included.
    #[must_use]
    pub fn format(&self, record: &ChangeRecord) -> String {
        let mut output = String::new();

        // Header goes first
        _ = writeln!(output, "{} {}\n", record.author, record.date.format("%Y-%m-%d"));

        // Then the files, sorted, with the colon closing the last line
        if !record.files.is_empty() {
            let mut files = record.files.clone();
            files.sort();
            let listed = files
                .iter()
                .map(|file| format!("\t* {file}"))
                .collect::<Vec<_>>()
                .join("\n");
            output.push_str(&listed);
            output.push_str(":\n");
        }

        // Reflow the message: strip the common indent, merge wrapped
        // source lines back into paragraphs, wrap to the target width.
        let dedented = reflow::dedent(&record.message);
        for logical in reflow::merge_continuations(&dedented) {
            for wrapped in reflow::wrap(&logical, self.width) {
                if self.magic_prefix.is_match(&wrapped) {
                    _ = writeln!(output, "\t_{wrapped}");
                } else {
                    _ = writeln!(output, "\t{wrapped}");
                }
            }
        }

        // Append the commit hash to the entry
        _ = writeln!(output, "\t\n\tGit commit: {}\n", record.hash);
        output
    }
}

impl Default for ChangeLogFormatter {
    fn default() -> Self {
        Self::new()
    }
}
