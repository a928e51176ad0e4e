//! Environment-driven mode selection
//!
//! Everything that touches `APP_ENV` lives in this one test so the process
//! environment is never mutated concurrently.

use log_composer::core::{RUN_MODE_ENV, DEBUG_MODE_TOKEN};
use log_composer::prelude::*;

fn logger_level_under(value: Option<&str>) -> (RunMode, LogLevel) {
    match value {
        Some(v) => std::env::set_var(RUN_MODE_ENV, v),
        None => std::env::remove_var(RUN_MODE_ENV),
    }

    let logger = Logger::from_env().expect("Failed to build logger");
    (logger.mode(), logger.level())
}

#[test]
fn test_logger_level_follows_environment() {
    let saved = std::env::var_os(RUN_MODE_ENV);

    assert_eq!(
        logger_level_under(None),
        (RunMode::Debug, LogLevel::Debug)
    );
    assert_eq!(
        logger_level_under(Some(DEBUG_MODE_TOKEN)),
        (RunMode::Debug, LogLevel::Debug)
    );
    assert_eq!(
        logger_level_under(Some("DEVELOP")),
        (RunMode::Debug, LogLevel::Debug)
    );
    assert_eq!(
        logger_level_under(Some("production")),
        (RunMode::Standard, LogLevel::Info)
    );

    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var(RUN_MODE_ENV, std::ffi::OsStr::from_bytes(b"dev\xffelop"));
        let logger = Logger::from_env().expect("Failed to build logger");
        assert_eq!(logger.level(), LogLevel::Info);
    }

    match saved {
        Some(v) => std::env::set_var(RUN_MODE_ENV, v),
        None => std::env::remove_var(RUN_MODE_ENV),
    }
}
