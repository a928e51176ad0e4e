//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A transport that delivers rendered lines
///
/// `line` is the composer's output for `record`; the record is passed along
/// for sinks that route on level or fields.
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
