//! # Log Composer
//!
//! A structured-logging formatter. Each log line is assembled from an
//! ordered tree of format handlers (literals, functions and nested groups)
//! and handed to pluggable appenders for delivery.
//!
//! ## Features
//!
//! - **Composable layouts**: build lines from `[timestamp] [LEVEL] message`
//!   blocks or your own handlers
//! - **Deterministic rendering**: a composer is a pure function of its
//!   handlers, the record and the render option
//! - **Thread safe**: one composer can be shared by every thread
//!
//! ```
//! use log_composer::prelude::*;
//! use log_composer::handlers;
//!
//! let composer: FormatComposer = FormatComposer::new(handlers!["<", ["a", "b"], ">"]);
//! let record = LogRecord::new(LogLevel::Info, "unused");
//! assert_eq!(composer.render(&record, None).unwrap(), "<ab>");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    #[cfg(feature = "file")]
    pub use crate::appenders::FileAppender;
    pub use crate::core::{
        Appender, Clock, FieldValue, FixedClock, FormatComposer, FormatHandler, LogContext,
        LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, RenderOptions, Result, RunMode,
        SystemClock, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use appenders::ConsoleAppender;
#[cfg(feature = "file")]
pub use appenders::FileAppender;
pub use crate::core::{
    Appender, Clock, FieldValue, FixedClock, FormatComposer, FormatHandler, HandlerFn,
    LogContext, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerError, RenderOptions, Result,
    RunMode, SharedClock, SystemClock, TimestampFormat,
};
