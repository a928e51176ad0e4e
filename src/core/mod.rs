//! Core logger types and traits

pub mod appender;
pub mod composer;
pub mod error;
pub mod format_handler;
pub mod handlers;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod run_mode;
pub mod timestamp;

pub use appender::Appender;
pub use composer::{FormatComposer, DEFAULT_MAX_DEPTH};
pub use error::{LoggerError, Result};
pub use format_handler::{FormatHandler, HandlerFn};
pub use handlers::RenderOptions;
pub use log_context::{FieldValue, LogContext};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use run_mode::{RunMode, DEBUG_MODE_TOKEN, RUN_MODE_ENV};
pub use timestamp::{Clock, FixedClock, SharedClock, SystemClock, TimestampFormat};
