//! File logging example
//!
//! Writes the same lines to the console and to a file.
//!
//! Run with: cargo run --example file_logging

use log_composer::core::handlers;
use log_composer::prelude::*;

fn main() -> Result<()> {
    println!("=== Log Composer - File Logging Example ===\n");

    let path = std::env::temp_dir().join("log_composer_demo.log");

    let mut layout = handlers::logger_handlers();
    layout.push(handlers::fields());

    let logger = Logger::builder()
        .mode(RunMode::Debug)
        .appender(ConsoleAppender::new())
        .appender(FileAppender::new(&path)?)
        .handlers(layout)
        .build()?;

    for i in 0..5 {
        logger.info_with_fields("Processing batch", LogContext::new().with_field("batch", i));
    }
    logger.flush()?;

    println!("\nLog written to {}", path.display());
    Ok(())
}
