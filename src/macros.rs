//! Macros for building handler lists and for formatted logging.
//!
//! # Examples
//!
//! ```
//! use log_composer::prelude::*;
//! use log_composer::{handlers, info};
//! use log_composer::core::handlers as h;
//!
//! let logger = Logger::builder()
//!     .appender(ConsoleAppender::new())
//!     .handlers(handlers![["<", (h::level()), ">"], " ", (h::message())])
//!     .build()
//!     .unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Build a `Vec<FormatHandler<_>>` from a literal tree.
///
/// Each element is one token tree:
/// - a string or char literal becomes `FormatHandler::Literal`
/// - a bracketed list becomes a nested `FormatHandler::Group`
/// - any other expression must be parenthesized and convert into a
///   `FormatHandler`
///
/// # Examples
///
/// ```
/// use log_composer::prelude::*;
/// use log_composer::handlers;
///
/// let list: Vec<FormatHandler> = handlers!["A", ["B", "C"], "D"];
/// let record = LogRecord::new(LogLevel::Info, "x");
/// assert_eq!(FormatComposer::new(list).render(&record, None).unwrap(), "ABCD");
/// ```
#[macro_export]
macro_rules! handlers {
    (@one [$($inner:tt)*]) => {
        $crate::core::FormatHandler::Group($crate::handlers![$($inner)*])
    };
    (@one $item:expr) => {
        $crate::core::FormatHandler::from($item)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::handlers!(@one $item)),*]
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use log_composer::prelude::*;
/// # let logger = Logger::builder().appender(ConsoleAppender::new()).build().unwrap();
/// use log_composer::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use log_composer::prelude::*;
/// # let logger = Logger::builder().appender(ConsoleAppender::new()).build().unwrap();
/// use log_composer::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::LogLevel::Error, $($arg)+)
    };
}
