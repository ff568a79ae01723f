//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use hello_adapters::WriterSink;
use hello_core::{
    application::LineSink,
    domain::LineKind,
    error::{HelloError, HelloResult},
};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or(config.output.format);

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Header line; bold cyan in human mode with colour.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.styled() {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON to stdout; suppressed in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
        self.term.write_line(&text)
    }

    /// A sink for tour lines matching the resolved format.
    ///
    /// Plain output goes through a raw stdout writer so the bytes are exactly
    /// the transcript; everything else goes through the styled terminal.
    pub fn line_sink(&self) -> Box<dyn LineSink + '_> {
        if self.quiet || self.resolved_format == OutputFormat::Human {
            Box::new(TerminalSink { output: self })
        } else {
            Box::new(WriterSink::new(io::stdout().lock()))
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn styled(&self) -> bool {
        !self.no_color && self.resolved_format == OutputFormat::Human
    }
}

/// [`LineSink`] over the [`OutputManager`]: styles headers, honours `--quiet`.
struct TerminalSink<'a> {
    output: &'a OutputManager,
}

impl LineSink for TerminalSink<'_> {
    fn write_line(&mut self, kind: LineKind, line: &str) -> HelloResult<()> {
        let written = match kind {
            LineKind::Header => self.output.header(line),
            _ => self.output.print(line),
        };
        written.map_err(sink_error)
    }

    fn flush(&mut self) -> HelloResult<()> {
        self.output.term.flush().map_err(sink_error)
    }
}

fn sink_error(err: io::Error) -> HelloError {
    if err.kind() == io::ErrorKind::BrokenPipe {
        HelloError::OutputClosed
    } else {
        HelloError::output(err.to_string())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
