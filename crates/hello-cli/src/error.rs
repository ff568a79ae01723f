//! Error handling for the hello CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use hello_core::error::HelloError;
use owo_colors::OwoColorize;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Keys accepted by `hello config get`.
pub const CONFIG_KEYS: [&str; 7] = [
    "tour.opening",
    "tour.subject",
    "tour.greeter",
    "tour.header",
    "tour.languages",
    "output.no_color",
    "output.format",
];

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// `config get` was given a key that does not exist.
    #[error("Unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `hello-core`.
    #[error("Tour failed: {0}")]
    Core(#[from] HelloError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownConfigKey { key } => {
                let mut out = vec![
                    format!("'{}' is not a configuration key", key),
                    "Known keys:".into(),
                ];
                out.extend(CONFIG_KEYS.iter().map(|k| format!("  • {k}")));
                out
            }

            Self::ConfigError { .. } => vec![
                "Check the file shown by 'hello config path'".into(),
                "Use 'hello init --force' to write a fresh default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownConfigKey { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(_) => ErrorCategory::Internal,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when stdout's reader went away, e.g. `hello | head -1`.
    ///
    /// Such runs end quietly with success.
    pub fn is_closed_output(&self) -> bool {
        match self {
            Self::Core(core) => core.is_closed(),
            Self::IoError { source, .. } => source.kind() == std::io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(category = "user", "{}", self),
            ErrorCategory::Configuration => {
                tracing::error!(category = "configuration", "{}", self)
            }
            ErrorCategory::Internal => tracing::error!(category = "internal", "{}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal error (I/O, bugs).
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_error() -> CliError {
        CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(std::io::Error::other("expected `]`"))),
        }
    }

    #[test]
    fn exit_codes() {
        assert_eq!(
            CliError::UnknownConfigKey { key: "x".into() }.exit_code(),
            2
        );
        assert_eq!(config_error().exit_code(), 4);
        assert_eq!(CliError::Core(HelloError::output("disk")).exit_code(), 1);
        assert_eq!(CliError::from(std::io::Error::other("disk")).exit_code(), 1);
    }

    #[test]
    fn unknown_key_lists_known_keys() {
        let suggestions = CliError::UnknownConfigKey {
            key: "tour.nope".into(),
        }
        .suggestions();
        for key in CONFIG_KEYS {
            assert!(suggestions.iter().any(|s| s.contains(key)), "{key}");
        }
    }

    #[test]
    fn plain_format_has_no_ansi() {
        let text = config_error().format_plain(false);
        assert!(text.contains("Error: Configuration error: bad file"));
        assert!(text.contains("Suggestions:"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn config_message_is_shown_once() {
        let text = config_error().format_plain(false);
        assert_eq!(text.matches("bad file").count(), 1, "{text}");
        assert!(config_error().suggestions().iter().all(|s| !s.contains("bad file")));
    }

    #[test]
    fn closed_output_is_recognised() {
        assert!(CliError::Core(HelloError::OutputClosed).is_closed_output());
        let pipe = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        assert!(CliError::from(pipe).is_closed_output());
        assert!(!CliError::Core(HelloError::output("disk")).is_closed_output());
        assert!(!config_error().is_closed_output());
    }

    #[test]
    fn verbose_shows_cause_chain() {
        let text = config_error().format_plain(true);
        assert!(text.contains("Caused by: expected `]`"));
        assert!(!text.contains("--verbose"));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = CliError::Core(HelloError::output("disk full"));
        assert_eq!(err.suggestions(), HelloError::output("disk full").suggestions());
    }
}
