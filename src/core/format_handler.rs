//! Format handler tree
//!
//! A rendered line is described by an ordered list of [`FormatHandler`]s.
//! Each handler is one of three shapes:
//!
//! - `Literal`: text appended verbatim
//! - `Function`: receives the line rendered so far and returns the new line
//! - `Group`: a nested list rendered on its own and appended as one unit
//!
//! `O` is the caller-defined option type threaded through every function
//! handler of a render pass.

use super::error::Result;
use super::log_record::LogRecord;
use std::fmt;
use std::sync::Arc;

/// Signature of a function handler
///
/// The returned string **replaces** the accumulated line. Handlers that only
/// want to add text return `acc + their_text`.
pub type HandlerFn<O> = Arc<dyn Fn(String, &LogRecord, Option<&O>) -> Result<String> + Send + Sync>;

pub enum FormatHandler<O = ()> {
    Literal(String),
    Function(HandlerFn<O>),
    Group(Vec<FormatHandler<O>>),
}

impl<O> FormatHandler<O> {
    pub fn literal(text: impl Into<String>) -> Self {
        FormatHandler::Literal(text.into())
    }

    /// Wrap a closure as a function handler
    ///
    /// ```
    /// use log_composer::core::FormatHandler;
    ///
    /// let upper: FormatHandler = FormatHandler::function(|acc, record, _opt| {
    ///     Ok(acc + &record.message.to_string().to_uppercase())
    /// });
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(String, &LogRecord, Option<&O>) -> Result<String> + Send + Sync + 'static,
    {
        FormatHandler::Function(Arc::new(f))
    }

    pub fn group<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = FormatHandler<O>>,
    {
        FormatHandler::Group(handlers.into_iter().collect())
    }

    /// Nesting depth of this handler; literals and functions are depth 0
    pub fn depth(&self) -> usize {
        match self {
            FormatHandler::Group(children) => {
                1 + children.iter().map(FormatHandler::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl<O> Clone for FormatHandler<O> {
    fn clone(&self) -> Self {
        match self {
            FormatHandler::Literal(text) => FormatHandler::Literal(text.clone()),
            FormatHandler::Function(f) => FormatHandler::Function(Arc::clone(f)),
            FormatHandler::Group(children) => FormatHandler::Group(children.clone()),
        }
    }
}

impl<O> fmt::Debug for FormatHandler<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatHandler::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            FormatHandler::Function(_) => f.write_str("Function(..)"),
            FormatHandler::Group(children) => f.debug_tuple("Group").field(children).finish(),
        }
    }
}

impl<O> From<&str> for FormatHandler<O> {
    fn from(text: &str) -> Self {
        FormatHandler::Literal(text.to_string())
    }
}

impl<O> From<String> for FormatHandler<O> {
    fn from(text: String) -> Self {
        FormatHandler::Literal(text)
    }
}

impl<O> From<char> for FormatHandler<O> {
    fn from(c: char) -> Self {
        FormatHandler::Literal(c.to_string())
    }
}

impl<O> From<Vec<FormatHandler<O>>> for FormatHandler<O> {
    fn from(children: Vec<FormatHandler<O>>) -> Self {
        FormatHandler::Group(children)
    }
}
