//! Logger front end
//!
//! The logger owns the transports and a shared [`FormatComposer`]. Each call
//! builds a [`LogRecord`], drops it if it is below the effective level,
//! renders it once and hands the line to every appender in order.

use super::{
    appender::Appender,
    composer::FormatComposer,
    error::{LoggerError, Result},
    format_handler::FormatHandler,
    handlers::{self, RenderOptions},
    log_context::{FieldValue, LogContext},
    log_level::LogLevel,
    log_record::LogRecord,
    run_mode::RunMode,
};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct Logger {
    min_level: RwLock<LogLevel>,
    mode: RunMode,
    composer: Arc<FormatComposer<RenderOptions>>,
    render_options: RenderOptions,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use log_composer::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .mode(RunMode::Standard)
    ///     .appender(ConsoleAppender::new())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(logger.level(), LogLevel::Info);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Console logger whose level follows [`RunMode::from_env`]
    #[cfg(feature = "console")]
    pub fn from_env() -> Result<Self> {
        Self::builder()
            .mode(RunMode::from_env())
            .appender(crate::appenders::ConsoleAppender::new())
            .build()
    }

    /// Effective minimum level
    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn composer(&self) -> &FormatComposer<RenderOptions> {
        &self.composer
    }

    pub fn render_options(&self) -> RenderOptions {
        self.render_options
    }

    /// The `(record) -> line` callback this logger formats with
    ///
    /// The callback shares the logger's composer and can be handed to other
    /// sinks that need the same layout.
    pub fn formatter(&self) -> impl Fn(&LogRecord) -> Result<String> + Send + Sync + 'static {
        let composer = Arc::clone(&self.composer);
        let options = self.render_options;
        move |record| composer.render(record, Some(&options))
    }

    /// Render `record` and deliver it to every appender
    ///
    /// A render failure is returned before any appender runs. Appender
    /// failures do not stop the remaining appenders; the first one is returned.
    pub fn try_log(&self, record: &LogRecord) -> Result<()> {
        if !self.is_enabled(record.level) {
            return Ok(());
        }

        let line = self.composer.render(record, Some(&self.render_options))?;

        let mut first_error: Option<LoggerError> = None;
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            if let Err(e) = appender.append(&line, record) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn log_record(&self, record: LogRecord) {
        if let Err(e) = self.try_log(&record) {
            eprintln!("[LOGGER ERROR] Failed to log {} record: {}", record.level, e);
        }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<FieldValue>) {
        if !self.is_enabled(level) {
            return;
        }
        self.log_record(LogRecord::new(level, message));
    }

    /// Log with structured fields
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        message: impl Into<FieldValue>,
        fields: LogContext,
    ) {
        if !self.is_enabled(level) {
            return;
        }
        self.log_record(LogRecord::new(level, message).with_fields(fields));
    }

    #[inline]
    pub fn debug(&self, message: impl Into<FieldValue>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<FieldValue>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<FieldValue>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<FieldValue>) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug_with_fields(&self, message: impl Into<FieldValue>, fields: LogContext) {
        self.log_with_fields(LogLevel::Debug, message, fields);
    }

    pub fn info_with_fields(&self, message: impl Into<FieldValue>, fields: LogContext) {
        self.log_with_fields(LogLevel::Info, message, fields);
    }

    pub fn warn_with_fields(&self, message: impl Into<FieldValue>, fields: LogContext) {
        self.log_with_fields(LogLevel::Warn, message, fields);
    }

    pub fn error_with_fields(&self, message: impl Into<FieldValue>, fields: LogContext) {
        self.log_with_fields(LogLevel::Error, message, fields);
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    /// Names of the registered appenders, in delivery order
    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|a| a.name().to_string())
            .collect()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use log_composer::prelude::*;
/// use log_composer::core::handlers;
///
/// let logger = Logger::builder()
///     .mode(RunMode::from_env())
///     .appender(ConsoleAppender::new())
///     .handlers(vec![handlers::level_block(), handlers::message(), handlers::fields()])
///     .render_options(RenderOptions::colored())
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    mode: RunMode,
    min_level: Option<LogLevel>,
    appenders: Vec<Box<dyn Appender>>,
    handlers: Option<Vec<FormatHandler<RenderOptions>>>,
    render_options: RenderOptions,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            mode: RunMode::default(),
            min_level: None,
            appenders: Vec::new(),
            handlers: None,
            render_options: RenderOptions::default(),
        }
    }

    /// Set the deployment mode; it decides the effective level
    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the level the mode would select
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Add an already boxed appender
    #[must_use = "builder methods return a new value"]
    pub fn boxed_appender(mut self, appender: Box<dyn Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Replace the default `[timestamp] [LEVEL] message` layout
    #[must_use = "builder methods return a new value"]
    pub fn handlers(mut self, handlers: Vec<FormatHandler<RenderOptions>>) -> Self {
        self.handlers = Some(handlers);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Build the Logger
    ///
    /// Fails with [`LoggerError::InvalidConfiguration`] when no appender was added.
    pub fn build(self) -> Result<Logger> {
        if self.appenders.is_empty() {
            return Err(LoggerError::config(
                "Logger",
                "at least one appender is required",
            ));
        }

        let handlers = self.handlers.unwrap_or_else(handlers::logger_handlers);
        Ok(Logger {
            min_level: RwLock::new(self.min_level.unwrap_or_else(|| self.mode.level())),
            mode: self.mode,
            composer: Arc::new(FormatComposer::new(handlers)),
            render_options: self.render_options,
            appenders: RwLock::new(self.appenders),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
