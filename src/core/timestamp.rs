//! Timestamp formatting utilities
//!
//! Provides the timestamp formats used by the timestamp handler and the
//! [`Clock`] abstraction it reads the current time from. Timestamps are
//! local wall-clock times, so they are modelled as `NaiveDateTime`.

use super::error::{LoggerError, Result};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::sync::Arc;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use log_composer::core::TimestampFormat;
///
/// let instant = NaiveDate::from_ymd_opt(2024, 1, 2)
///     .and_then(|d| d.and_hms_opt(3, 4, 5))
///     .unwrap();
/// assert_eq!(
///     TimestampFormat::Classic.format(&instant).unwrap(),
///     "2024/01/02 03:04:05"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2024/01/02 03:04:05`
    ///
    /// This is the default format of the timestamp handler.
    #[default]
    Classic,

    /// ISO 8601 with milliseconds: `2024-01-02T03:04:05.000`
    Iso8601,

    /// ISO 8601 with microseconds: `2024-01-02T03:04:05.000000`
    Iso8601Micros,

    /// Custom strftime format
    ///
    /// ```
    /// use log_composer::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`
    ///
    /// Fails with [`LoggerError::FormatterError`] when a custom pattern holds
    /// a specifier chrono cannot render.
    pub fn format(&self, datetime: &NaiveDateTime) -> Result<String> {
        let pattern = match self {
            TimestampFormat::Classic => "%Y/%m/%d %H:%M:%S",
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3f",
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6f",
            TimestampFormat::Custom(format_str) => format_str.as_str(),
        };

        let mut rendered = String::new();
        write!(rendered, "{}", datetime.format(pattern)).map_err(|_| {
            LoggerError::formatter("timestamp", format!("invalid format '{}'", pattern))
        })?;
        Ok(rendered)
    }

    /// Get a description of this format
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::Classic => "Local date and time (2024/01/02 03:04:05)",
            TimestampFormat::Iso8601 => "ISO 8601 with milliseconds (2024-01-02T03:04:05.000)",
            TimestampFormat::Iso8601Micros => {
                "ISO 8601 with microseconds (2024-01-02T03:04:05.000000)"
            }
            TimestampFormat::Custom(_) => "Custom strftime format",
        }
    }
}

/// Source of the current time for timestamp handlers
///
/// Tests inject a [`FixedClock`] so rendered lines are deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Shared clock handle
pub type SharedClock = Arc<dyn Clock>;

/// Reads the local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .expect("valid datetime")
            + Duration::microseconds(123456)
    }

    #[test]
    fn test_classic_format() {
        let result = TimestampFormat::Classic.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2024/01/02 03:04:05");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2024-01-02T03:04:05.123");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2024-01-02T03:04:05.123456");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "02/Jan/2024:03:04:05");
    }

    #[test]
    fn test_invalid_custom_format_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        let result = format.format(&fixed_datetime());

        assert!(matches!(
            result,
            Err(LoggerError::FormatterError { ref format_type, .. }) if format_type == "timestamp"
        ));
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Classic);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(fixed_datetime());
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), fixed_datetime());
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
