//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity (logs go to stderr):
    (none)  - Only warnings and errors
    -v      - Info level
    -vv     - Debug level
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.  Replaces the user and local config files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Output format.  Falls back to `output.format` from the config.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        help = "Output format [default: auto]"
    )]
    pub output_format: Option<OutputFormat>,
}

/// How the CLI should render its output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON output.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Human => write!(f, "human"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
