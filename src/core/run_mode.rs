//! Deployment mode selection
//!
//! The mode decides the logger's effective level. It is resolved once,
//! usually at process start, and then passed to the
//! [`LoggerBuilder`](crate::core::LoggerBuilder) explicitly.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;

/// Environment variable holding the deployment mode
pub const RUN_MODE_ENV: &str = "APP_ENV";

/// Value of [`RUN_MODE_ENV`] that selects [`RunMode::Debug`]
pub const DEBUG_MODE_TOKEN: &str = "develop";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Verbose output, effective level `Debug`
    #[default]
    Debug,
    /// Effective level `Info`
    Standard,
}

impl RunMode {
    /// Read [`RUN_MODE_ENV`] from the process environment
    pub fn from_env() -> Self {
        Self::from_os_value(std::env::var_os(RUN_MODE_ENV).as_deref())
    }

    /// Like [`RunMode::from_value`]; a present value that is not valid UTF-8
    /// can never equal the debug token, so it selects standard
    pub fn from_os_value(value: Option<&OsStr>) -> Self {
        match value {
            None => RunMode::Debug,
            Some(v) => Self::from_value(Some(v.to_str().unwrap_or_default())),
        }
    }

    /// Absent or `develop` (any case) selects debug, anything else standard
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None => RunMode::Debug,
            Some(v) if v.eq_ignore_ascii_case(DEBUG_MODE_TOKEN) => RunMode::Debug,
            Some(_) => RunMode::Standard,
        }
    }

    pub fn level(&self) -> LogLevel {
        match self {
            RunMode::Debug => LogLevel::Debug,
            RunMode::Standard => LogLevel::Info,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, RunMode::Debug)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Debug => f.write_str("debug"),
            RunMode::Standard => f.write_str("standard"),
        }
    }
}
