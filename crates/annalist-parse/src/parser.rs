//! The log-stream state machine.

use annalist_commit::{ChangeRecord, RecordBuilder};
use chrono::NaiveDate;
use tracing::debug;

use crate::{ParseError, ParseResult, patterns::Patterns};

/// Progress through one commit's block of the log stream.
///
/// A record may skip ahead but never regresses; a new commit header is
/// recognized in every state and restarts the progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No commit header has been seen yet.
    Start,
    /// Waiting for the `Author:` / `Date:` pair.
    Metadata,
    /// Accumulating indented message lines.
    Message,
    /// Reading the per-file diff-stat table.
    Stats,
    /// Reading `--summary` mode lines until the next header.
    Modes,
}

/// Streaming parser for
/// `git log --summary --no-merges --no-color --stat --date=short` output.
///
/// Feed it one line at a time; a completed [`ChangeRecord`] pops out
/// whenever the next commit header flushes its predecessor, and
/// [`LogParser::finish`] flushes the record still open at end of input.
pub struct LogParser {
    patterns: Patterns,
    state: State,
    current: Option<RecordBuilder>,
}

impl LogParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: Patterns::new(),
            state: State::Start,
            current: None,
        }
    }

    /// Consumes one line of log output.
    ///
    /// Returns `Ok(Some(record))` exactly when this line is a commit
    /// header and the previous record was well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::OrphanLine`] when any line, blank lines
    /// included, arrives before the first commit header. This aborts the
    /// whole run; the input is not a log stream.
    pub fn feed_line(&mut self, line: &str) -> ParseResult<Option<ChangeRecord>> {
        if let Some(caps) = self.patterns.header.captures(line) {
            return Ok(self.open_record(caps[1].to_string()));
        }

        let Some(builder) = self.current.as_mut() else {
            return Err(ParseError::OrphanLine(line.trim().to_string()));
        };

        self.state = match self.state {
            State::Start | State::Metadata => Self::on_metadata(&self.patterns, builder, line),
            State::Message => Self::on_message(&self.patterns, builder, line),
            State::Stats => Self::on_stats(&self.patterns, builder, line),
            State::Modes => Self::on_modes(&self.patterns, builder, line),
        };
        Ok(None)
    }

    /// Flushes the record still open at end of input, if it is
    /// well-formed.
    #[must_use]
    pub fn finish(self) -> Option<ChangeRecord> {
        let builder = self.current?;
        let hash = builder.hash().to_string();
        let record = builder.finish();
        if record.is_none() {
            debug!(%hash, "dropping record with incomplete metadata at end of input");
        }
        record
    }

    /// Flushes the previous record (dropping it when ill-formed) and
    /// opens a fresh one for the given hash.
    fn open_record(&mut self, hash: String) -> Option<ChangeRecord> {
        let flushed = self.current.take().and_then(|builder| {
            let prev = builder.hash().to_string();
            let record = builder.finish();
            if record.is_none() {
                debug!(hash = %prev, "dropping record with incomplete metadata");
            }
            record
        });
        self.current = Some(RecordBuilder::new(hash));
        self.state = State::Metadata;
        flushed
    }

    fn on_metadata(patterns: &Patterns, builder: &mut RecordBuilder, line: &str) -> State {
        if let Some(caps) = patterns.author.captures(line) {
            builder.set_author(caps[1].trim());
        } else if let Some(caps) = patterns.date.captures(line) {
            if let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
                builder.set_date(date);
            }
        }
        if builder.has_metadata() {
            State::Message
        } else {
            State::Metadata
        }
    }

    fn on_message(patterns: &Patterns, builder: &mut RecordBuilder, line: &str) -> State {
        if line.is_empty() {
            // Only a blank line after message content terminates the
            // section; leading blanks are discarded.
            if builder.has_message() {
                return State::Stats;
            }
            return State::Message;
        }
        if patterns.message.is_match(line) {
            builder.push_message_line(line);
        }
        State::Message
    }

    fn on_stats(patterns: &Patterns, builder: &mut RecordBuilder, line: &str) -> State {
        if let Some(caps) = patterns.stat.captures(line) {
            builder.push_file(caps[1].trim());
        } else if patterns.end_stat.is_match(line) {
            return State::Modes;
        }
        State::Stats
    }

    fn on_modes(patterns: &Patterns, builder: &mut RecordBuilder, line: &str) -> State {
        if let Some(caps) = patterns.mode.captures(line) {
            builder.push_file(caps[1].trim());
        }
        State::Modes
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}
