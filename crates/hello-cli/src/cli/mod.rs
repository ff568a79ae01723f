//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hello",
    bin_name = "hello",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A greeting tour: functions, structs, methods and loops",
    long_about = "Prints a greeting, a function-built greeting, a method-built \
                  greeting and an enumerated list of languages.  Run without a \
                  subcommand to play the default tour.",
    after_help = "EXAMPLES:\n\
        \x20 hello\n\
        \x20 hello tour --subject Rust --greeter \"Rust OOP\" -l Rust -l Go\n\
        \x20 hello greet World --method\n\
        \x20 hello languages --output-format json\n\
        \x20 hello completions bash > /usr/share/bash-completion/completions/hello",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; plays the tour when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the greeting tour.
    #[command(
        visible_alias = "t",
        about = "Play the greeting tour (default)",
        after_help = "EXAMPLES:\n\
            \x20 hello tour\n\
            \x20 hello tour --subject Rust --greeter \"Rust OOP\"\n\
            \x20 hello tour -l Rust -l C++ -l Go --header \"Languages:\""
    )]
    Tour(TourArgs),

    /// Print a single greeting.
    #[command(
        about = "Print a single greeting",
        after_help = "EXAMPLES:\n\
            \x20 hello greet World\n\
            \x20 hello greet \"Go OOP\" --method"
    )]
    Greet(GreetArgs),

    /// Print the enumerated language list.
    #[command(visible_alias = "ls", about = "List the configured languages")]
    Languages,

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 hello init           # user config location\n\
            \x20 hello init --local   # .hello.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hello completions bash > ~/.local/share/bash-completion/completions/hello\n\
            \x20 hello completions zsh  > ~/.zfunc/_hello\n\
            \x20 hello completions fish > ~/.config/fish/completions/hello.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 hello config get tour.subject\n\
            \x20 hello config list\n\
            \x20 hello config path"
    )]
    Config(ConfigCommands),
}

// ── tour ──────────────────────────────────────────────────────────────────────

/// Arguments for `hello tour`.  Unset fields come from the config.
#[derive(Debug, Default, Args)]
pub struct TourArgs {
    /// Name passed to the greeting function.
    #[arg(short = 's', long = "subject", value_name = "NAME")]
    pub subject: Option<String>,

    /// Name stored in the greeter.
    #[arg(short = 'g', long = "greeter", value_name = "NAME")]
    pub greeter: Option<String>,

    /// Line printed above the language list.
    #[arg(long = "header", value_name = "TEXT")]
    pub header: Option<String>,

    /// Language to list; repeat to build the whole list.
    #[arg(
        short = 'l',
        long = "language",
        value_name = "LANGUAGE",
        action = clap::ArgAction::Append
    )]
    pub languages: Vec<String>,
}

// ── greet ─────────────────────────────────────────────────────────────────────

/// Arguments for `hello greet`.
#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Who to greet.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Build the greeting through a greeter value instead of the function.
    #[arg(short = 'm', long = "method")]
    pub method: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hello init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.hello.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hello completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `hello config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tour.subject`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the paths configuration is read from.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
