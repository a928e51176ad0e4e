//! Custom handler example
//!
//! Builds layouts from literals, nested groups and closures, including a
//! function handler that rewrites the whole line.
//!
//! Run with: cargo run --example custom_handlers

use log_composer::core::handlers as h;
use log_composer::handlers;
use log_composer::prelude::*;

fn main() -> Result<()> {
    let record = LogRecord::new(LogLevel::Warn, "cache miss").with_field("key", "user:42");

    // Nested groups render on their own and are appended whole
    let layout: FormatComposer = FormatComposer::new(handlers![
        ["<", (h::level()), ">"],
        " ",
        (h::message()),
        (h::fields()),
    ]);
    println!("{}", layout.render(&record, None)?);

    // A function's return value replaces everything rendered before it
    let boxed: FormatComposer = FormatComposer::new(vec![
        h::level_block(),
        h::message(),
        FormatHandler::function(|acc, _, _| Ok(format!("| {} |", acc))),
    ]);
    println!("{}", boxed.render(&record, None)?);

    // The option value reaches every function handler of the pass
    let prefixed: FormatComposer<&'static str> = FormatComposer::new(vec![
        FormatHandler::function(|acc, _, opt: Option<&&'static str>| {
            Ok(acc + opt.copied().unwrap_or("app"))
        }),
        ": ".into(),
        h::message(),
    ]);
    println!("{}", prefixed.render(&record, Some(&"worker-3"))?);
    println!("{}", prefixed.render(&record, None)?);

    Ok(())
}
