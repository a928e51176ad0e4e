//! Basic logger usage example
//!
//! Demonstrates the default `[timestamp] [LEVEL] message` layout on the console.
//!
//! Run with: cargo run --example basic_usage

use log_composer::prelude::*;

fn main() -> Result<()> {
    println!("=== Log Composer - Basic Usage Example ===\n");

    // Level follows APP_ENV: unset or "develop" logs debug records too
    let mode = RunMode::from_env();
    let logger = Logger::builder()
        .mode(mode)
        .appender(ConsoleAppender::new())
        .render_options(RenderOptions::colored())
        .build()?;

    println!("Mode: {} (level {})\n", mode, logger.level());

    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn(42);
    logger.error_with_fields(
        "Request failed",
        LogContext::new().with_field("status", 503).with_field("retry", true),
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
