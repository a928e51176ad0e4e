//! Console appender implementation

use crate::core::{Appender, LogLevel, LogRecord, Result};
use std::io::Write;

/// Writes lines to stdout, routing Error and Fatal records to stderr
pub struct ConsoleAppender {
    split_errors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { split_errors: true }
    }

    /// Send every line to stdout, whatever its level
    #[must_use]
    pub fn stdout_only(mut self) -> Self {
        self.split_errors = false;
        self
    }

    fn to_stderr(&self, level: LogLevel) -> bool {
        self.split_errors && matches!(level, LogLevel::Error | LogLevel::Fatal)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str, record: &LogRecord) -> Result<()> {
        if self.to_stderr(record.level) {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
