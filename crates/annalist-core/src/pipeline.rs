//! Streaming conversion pipeline.

use std::io::{BufRead, Write};

use annalist_format::ChangeLogFormatter;
use annalist_git::LogCommand;
use annalist_parse::LogParser;
use tracing::debug;

use crate::CoreResult;

/// Owns the parser and the formatter and drives the line stream through
/// them, one forward pass, writing each entry as soon as its record
/// completes.
pub struct Pipeline {
    parser: LogParser,
    formatter: ChangeLogFormatter,
}

impl Pipeline {
    /// Creates a pipeline around the given formatter.
    #[must_use]
    pub fn new(formatter: ChangeLogFormatter) -> Self {
        Self {
            parser: LogParser::new(),
            formatter,
        }
    }

    /// Converts a complete log stream and returns the number of entries
    /// written.
    ///
    /// Entries already written stay written if a later line turns out to
    /// be fatal; nothing is rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error on the malformed-input condition (a line before
    /// the first commit header) or when reading or writing fails.
    pub fn convert<R, W>(mut self, input: R, output: &mut W) -> CoreResult<usize>
    where
        R: BufRead,
        W: Write + ?Sized,
    {
        let mut written = 0;

        for line in input.lines() {
            let line = line?;
            if let Some(record) = self.parser.feed_line(&line)? {
                output.write_all(self.formatter.format(&record).as_bytes())?;
                written += 1;
            }
        }

        if let Some(record) = self.parser.finish() {
            output.write_all(self.formatter.format(&record).as_bytes())?;
            written += 1;
        }

        debug!(entries = written, "changelog conversion finished");
        Ok(written)
    }

    /// Spawns the given `git log` invocation and converts its output.
    ///
    /// The subprocess is killed and reaped when conversion fails, and
    /// its exit status is checked once the stream is drained, so the
    /// pipe is released on every path.
    ///
    /// # Errors
    ///
    /// Returns an error when git cannot be spawned, exits non-zero, or
    /// the conversion itself fails.
    pub fn convert_log<W>(self, command: LogCommand, output: &mut W) -> CoreResult<usize>
    where
        W: Write + ?Sized,
    {
        let mut stream = command.spawn()?;
        match self.convert(stream.reader(), output) {
            Ok(entries) => {
                stream.finish()?;
                Ok(entries)
            }
            Err(err) => {
                stream.abort();
                Err(err)
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ChangeLogFormatter::new())
    }
}
