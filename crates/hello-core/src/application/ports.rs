//! Driven (output) ports - implemented by infrastructure.
//!
//! The `hello-adapters` crate provides implementations; the CLI adds a
//! styled terminal sink of its own.

use crate::domain::LineKind;
use crate::error::HelloResult;

/// Port for line-oriented output.
///
/// Implemented by:
/// - `hello_adapters::WriterSink` (any `io::Write`)
/// - `hello_adapters::MemorySink` (testing)
/// - the CLI's terminal sink (styled output)
///
/// `kind` is informational; sinks may style by it but must not reorder or
/// drop lines.
#[cfg_attr(test, mockall::automock)]
pub trait LineSink {
    /// Write one line. The sink supplies the line terminator.
    fn write_line(&mut self, kind: LineKind, line: &str) -> HelloResult<()>;

    /// Flush buffered output, if any.
    fn flush(&mut self) -> HelloResult<()> {
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, kind: LineKind, line: &str) -> HelloResult<()> {
        (**self).write_line(kind, line)
    }

    fn flush(&mut self) -> HelloResult<()> {
        (**self).flush()
    }
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn write_line(&mut self, kind: LineKind, line: &str) -> HelloResult<()> {
        (**self).write_line(kind, line)
    }

    fn flush(&mut self) -> HelloResult<()> {
        (**self).flush()
    }
}
