//! Format composer
//!
//! Renders a [`LogRecord`] into one line by evaluating an ordered list of
//! [`FormatHandler`]s left to right over a single accumulator:
//!
//! - a literal is appended to the accumulator
//! - a function receives the accumulator and its result replaces it
//! - a group is rendered as an independent pass seeded with an empty
//!   string, and its result is appended
//!
//! The handler list is fixed once the composer is built. A composer holds
//! no per-call state, so one instance can be shared by any number of
//! threads behind an `Arc`.

use super::error::{LoggerError, Result};
use super::format_handler::FormatHandler;
use super::handlers;
use super::log_record::LogRecord;
use std::fmt;

/// Default limit on group nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

pub struct FormatComposer<O = ()> {
    handlers: Vec<FormatHandler<O>>,
    max_depth: usize,
}

impl<O> FormatComposer<O> {
    #[must_use]
    pub fn new(handlers: Vec<FormatHandler<O>>) -> Self {
        Self {
            handlers,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deeply groups may nest before rendering fails with
    /// [`LoggerError::HandlerCycleDetected`]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build a composer with a different handler list, keeping the other settings
    #[must_use]
    pub fn with_handlers(&self, handlers: Vec<FormatHandler<O>>) -> Self {
        Self {
            handlers,
            max_depth: self.max_depth,
        }
    }

    pub fn handlers(&self) -> &[FormatHandler<O>] {
        &self.handlers
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Render `record` into a line
    ///
    /// Handler failures are returned unchanged; nothing is substituted.
    ///
    /// ```
    /// use log_composer::prelude::*;
    ///
    /// let composer: FormatComposer = FormatComposer::new(vec![
    ///     "A".into(),
    ///     FormatHandler::group(vec!["B".into(), "C".into()]),
    ///     "D".into(),
    /// ]);
    /// let record = LogRecord::new(LogLevel::Info, "ignored");
    /// assert_eq!(composer.render(&record, None).unwrap(), "ABCD");
    /// ```
    pub fn render(&self, record: &LogRecord, option: Option<&O>) -> Result<String> {
        self.render_list(&self.handlers, record, option, 0)
    }

    fn render_list(
        &self,
        handlers: &[FormatHandler<O>],
        record: &LogRecord,
        option: Option<&O>,
        depth: usize,
    ) -> Result<String> {
        if depth > self.max_depth {
            return Err(LoggerError::handler_cycle(self.max_depth));
        }

        let mut line = String::new();
        for handler in handlers {
            match handler {
                FormatHandler::Literal(text) => line.push_str(text),
                FormatHandler::Function(f) => line = f(line, record, option)?,
                FormatHandler::Group(children) => {
                    let rendered = self.render_list(children, record, option, depth + 1)?;
                    line.push_str(&rendered);
                }
            }
        }
        Ok(line)
    }
}

impl<O> fmt::Debug for FormatComposer<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatComposer")
            .field("handlers", &self.handlers)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl<O> Clone for FormatComposer<O> {
    fn clone(&self) -> Self {
        self.with_handlers(self.handlers.clone())
    }
}

impl<O: 'static> Default for FormatComposer<O> {
    /// Composer with [`handlers::default_handlers`]
    fn default() -> Self {
        Self::new(handlers::default_handlers())
    }
}
