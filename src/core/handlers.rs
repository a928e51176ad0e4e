//! Built-in format handlers
//!
//! Every builder here returns a [`FormatHandler`] that appends to the
//! accumulated line. The `*_block` helpers wrap a handler in the usual
//! `[`, `]`, space decoration as one group:
//!
//! ```text
//! [2024/01/02 03:04:05] [INFO] message
//! ```

use super::error::LoggerError;
use super::format_handler::FormatHandler;
use super::log_level::LogLevel;
use super::timestamp::{SharedClock, SystemClock, TimestampFormat};
use std::sync::Arc;

#[cfg(feature = "console")]
use colored::Colorize;

/// Option value the [`Logger`](crate::core::Logger) threads through its handlers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Color the level with ANSI escapes
    pub color: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn colored() -> Self {
        Self { color: true }
    }
}

/// Current local time in [`TimestampFormat::Classic`] form
pub fn timestamp<O: 'static>() -> FormatHandler<O> {
    timestamp_with(Arc::new(SystemClock), TimestampFormat::Classic)
}

/// Time read from `clock`, rendered with `format`
pub fn timestamp_with<O: 'static>(clock: SharedClock, format: TimestampFormat) -> FormatHandler<O> {
    FormatHandler::function(move |acc, _, _| Ok(acc + &format.format(&clock.now())?))
}

/// Uppercase level name, e.g. `WARN`
pub fn level<O: 'static>() -> FormatHandler<O> {
    FormatHandler::function(|acc, record, _| Ok(acc + record.level.to_str()))
}

/// Uppercase level name, colored when the render options ask for it
pub fn styled_level() -> FormatHandler<RenderOptions> {
    FormatHandler::function(|acc, record, opt: Option<&RenderOptions>| {
        let color = opt.is_some_and(|o| o.color);
        Ok(acc + &paint_level(record.level, color))
    })
}

#[cfg(feature = "console")]
fn paint_level(level: LogLevel, color: bool) -> String {
    if color {
        level.to_str().color(level.color_code()).to_string()
    } else {
        level.to_str().to_string()
    }
}

#[cfg(not(feature = "console"))]
fn paint_level(level: LogLevel, _color: bool) -> String {
    level.to_str().to_string()
}

/// The record's message coerced to text
///
/// Fails with [`LoggerError::FormatterError`] when the message is null.
pub fn message<O: 'static>() -> FormatHandler<O> {
    FormatHandler::function(|acc, record, _| {
        if record.message.is_null() {
            return Err(LoggerError::formatter("message", "record has no message"));
        }
        Ok(acc + &record.message.to_string())
    })
}

/// ` key=value` pairs for the record's fields, nothing when there are none
pub fn fields<O: 'static>() -> FormatHandler<O> {
    FormatHandler::function(|acc, record, _| {
        if record.fields.is_empty() {
            return Ok(acc);
        }
        Ok(format!("{} {}", acc, record.fields.format_fields()))
    })
}

/// The whole record as one JSON object
///
/// Keys come out as `level`, `message`, then `fields` holding the record's
/// fields in insertion order. `fields` is omitted when the record has none.
pub fn json<O: 'static>() -> FormatHandler<O> {
    FormatHandler::function(|acc, record, _| {
        let mut json_obj = serde_json::Map::new();
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.as_tag().to_string()),
        );
        json_obj.insert("message".to_string(), record.message.to_json_value());

        if !record.fields.is_empty() {
            let fields: serde_json::Map<String, serde_json::Value> = record
                .fields
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_json_value()))
                .collect();
            json_obj.insert("fields".to_string(), serde_json::Value::Object(fields));
        }

        let rendered = serde_json::to_string(&serde_json::Value::Object(json_obj))?;
        Ok(acc + &rendered)
    })
}

/// `inner` wrapped as `[inner] `
pub fn bracketed<O>(inner: FormatHandler<O>) -> FormatHandler<O> {
    FormatHandler::group(vec!["[".into(), inner, "]".into(), " ".into()])
}

pub fn timestamp_block<O: 'static>() -> FormatHandler<O> {
    bracketed(timestamp())
}

pub fn timestamp_block_with<O: 'static>(
    clock: SharedClock,
    format: TimestampFormat,
) -> FormatHandler<O> {
    bracketed(timestamp_with(clock, format))
}

pub fn level_block<O: 'static>() -> FormatHandler<O> {
    bracketed(level())
}

/// `[timestamp] [LEVEL] message`
pub fn default_handlers<O: 'static>() -> Vec<FormatHandler<O>> {
    vec![timestamp_block(), level_block(), message()]
}

/// [`default_handlers`] with a level that honours [`RenderOptions::color`]
pub fn logger_handlers() -> Vec<FormatHandler<RenderOptions>> {
    vec![timestamp_block(), bracketed(styled_level()), message()]
}
