//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `hello-core` and
//! `hello-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the verbosity filter.
const CRATES: [&str; 3] = ["hello", "hello_core", "hello_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.  Logs go to
/// stderr so stdout carries only the tour itself.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise every crate of ours gets the same level.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
