//! # hello
//!
//! A greeting tour on the command line.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + files + env).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too; they go to stdout and
            // succeed.  Real parse failures exit 2.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` writes the file `--config` points at, and completions never
    // read config, so neither may fail on a missing or broken file.
    let config = if needs_config(cli.command.as_ref()) {
        match AppConfig::load(cli.global.config.as_ref()) {
            Ok(cfg) => cfg,
            Err(e) => {
                return handle_error(
                    CliError::ConfigError {
                        message: format!("{e:#}"),
                        source: Some(e.into()),
                    },
                    verbose,
                    no_color,
                );
            }
        }
    } else {
        AppConfig::default()
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("hello completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

fn needs_config(command: Option<&Commands>) -> bool {
    !matches!(command, Some(Commands::Init(_) | Commands::Completions(_)))
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        None => commands::tour::execute(Default::default(), config, output),
        Some(Commands::Tour(cmd)) => commands::tour::execute(cmd, config, output),
        Some(Commands::Greet(cmd)) => commands::greet::execute(cmd, output),
        Some(Commands::Languages) => commands::languages::execute(config, output),
        Some(Commands::Init(cmd)) => commands::init::execute(cmd, cli.global, output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
        Some(Commands::Config(cmd)) => commands::config::execute(cmd, &cli.global, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    if err.is_closed_output() {
        debug!("stdout closed early; stopping");
        return ExitCode::SUCCESS;
    }

    err.log();

    // Written straight to stderr so it shows even when stdout is redirected.
    let msg = if !no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
