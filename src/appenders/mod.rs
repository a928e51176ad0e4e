//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
#[cfg(feature = "file")]
pub use file::FileAppender;

pub use crate::core::Appender;
