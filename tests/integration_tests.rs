//! Integration tests for the log composer
//!
//! These tests verify:
//! - Default layout rendering with an injected clock
//! - Logger delivery to file appenders
//! - Construction failures
//! - Mode-driven level selection

use chrono::NaiveDate;
use log_composer::appenders::file::FileAppender;
use log_composer::core::handlers;
use log_composer::core::{
    FixedClock, FormatComposer, FormatHandler, LogContext, LogLevel, LogRecord, Logger,
    LoggerError, RenderOptions, RunMode, SharedClock, TimestampFormat,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn fixed_clock() -> SharedClock {
    let instant = NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(3, 4, 5))
        .expect("valid datetime");
    Arc::new(FixedClock(instant))
}

fn fixed_layout() -> Vec<FormatHandler<RenderOptions>> {
    vec![
        handlers::timestamp_block_with(fixed_clock(), TimestampFormat::Classic),
        handlers::level_block(),
        handlers::message(),
        handlers::fields(),
    ]
}

#[test]
fn test_default_layout_with_fixed_clock() {
    let composer: FormatComposer = FormatComposer::new(vec![
        handlers::timestamp_block_with(fixed_clock(), TimestampFormat::Classic),
        handlers::level_block(),
        handlers::message(),
    ]);

    let record = LogRecord::new(LogLevel::Info, "service started");
    assert_eq!(
        composer.render(&record, None).unwrap(),
        "[2024/01/02 03:04:05] [INFO] service started"
    );
}

#[test]
fn test_logger_writes_rendered_lines_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::builder()
        .mode(RunMode::Debug)
        .appender(FileAppender::new(&log_file).expect("Failed to create appender"))
        .handlers(fixed_layout())
        .build()
        .expect("Failed to build logger");

    logger.debug("connecting");
    logger.info_with_fields("connected", LogContext::new().with_field("peer", "10.0.0.7"));
    logger.error(503);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[2024/01/02 03:04:05] [DEBUG] connecting",
            "[2024/01/02 03:04:05] [INFO] connected peer=10.0.0.7",
            "[2024/01/02 03:04:05] [ERROR] 503",
        ]
    );
}

#[test]
fn test_standard_mode_drops_debug_records() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("standard.log");

    let logger = Logger::builder()
        .mode(RunMode::from_value(Some("production")))
        .appender(FileAppender::new(&log_file).expect("Failed to create appender"))
        .handlers(fixed_layout())
        .build()
        .expect("Failed to build logger");

    logger.debug("not written");
    logger.warn("written");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[2024/01/02 03:04:05] [WARN] written\n");
}

#[test]
fn test_every_appender_receives_the_same_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");

    let logger = Logger::builder()
        .appender(FileAppender::new(&first).unwrap())
        .appender(FileAppender::new(&second).unwrap())
        .handlers(fixed_layout())
        .build()
        .unwrap();

    logger.info("fan out");
    logger.flush().unwrap();

    let a = fs::read_to_string(&first).unwrap();
    let b = fs::read_to_string(&second).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "[2024/01/02 03:04:05] [INFO] fan out\n");
}

#[test]
fn test_logger_requires_an_appender() {
    let result = Logger::builder().mode(RunMode::Standard).build();
    match result {
        Err(LoggerError::InvalidConfiguration { component, .. }) => {
            assert_eq!(component, "Logger")
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("logger built without appenders"),
    }
}

#[test]
fn test_file_appender_bad_path_is_configuration_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("no_such_dir").join("app.log");

    let result = FileAppender::new(&missing);
    assert!(matches!(
        result,
        Err(LoggerError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_null_message_is_reported_not_written() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("null.log");

    let logger = Logger::builder()
        .appender(FileAppender::new(&log_file).unwrap())
        .handlers(fixed_layout())
        .build()
        .unwrap();

    let record = LogRecord::new(LogLevel::Info, None::<String>);
    assert!(matches!(
        logger.try_log(&record),
        Err(LoggerError::FormatterError { .. })
    ));

    // log_record reports the failure on stderr and writes nothing.
    logger.log_record(record);
    logger.flush().unwrap();
    assert_eq!(fs::read_to_string(&log_file).unwrap(), "");
}

#[test]
fn test_json_layout() {
    let composer: FormatComposer = FormatComposer::new(vec![handlers::json()]);
    let record = LogRecord::new(LogLevel::Warn, "quota")
        .with_field("used", 91)
        .with_field("tenant", "acme");

    let line = composer.render(&record, None).unwrap();
    assert_eq!(
        line,
        r#"{"level":"warn","message":"quota","fields":{"used":91,"tenant":"acme"}}"#
    );
}
