//! Log record structure

use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// One log event handed to the composer for rendering
///
/// The message is stored as a [`FieldValue`] so that any scalar can be
/// logged; handlers coerce it to text when the line is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: FieldValue,
    #[serde(skip_serializing_if = "LogContext::is_empty", default)]
    pub fields: LogContext,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<FieldValue>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: LogContext::new(),
        }
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    /// Merge `fields` into the record, keeping the order they arrive in
    pub fn with_fields(mut self, fields: LogContext) -> Self {
        for (key, value) in fields.iter() {
            self.fields.add_field(key, value.clone());
        }
        self
    }
}
