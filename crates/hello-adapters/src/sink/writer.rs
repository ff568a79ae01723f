//! `io::Write`-backed sink.

use std::io::{self, Write};

use hello_core::{
    application::ports::LineSink,
    domain::LineKind,
    error::{HelloError, HelloResult},
};
use tracing::{debug, warn};

/// Writes each line followed by `\n` to the wrapped writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, _kind: LineKind, line: &str) -> HelloResult<()> {
        writeln!(self.writer, "{line}").map_err(io_to_output)
    }

    fn flush(&mut self) -> HelloResult<()> {
        self.writer.flush().map_err(io_to_output)
    }
}

fn io_to_output(err: io::Error) -> HelloError {
    if err.kind() == io::ErrorKind::BrokenPipe {
        debug!("reader closed the output");
        return HelloError::OutputClosed;
    }
    warn!(kind = ?err.kind(), "sink write failed");
    HelloError::output(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use hello_core::application::TourService;
    use hello_core::domain::TourScript;

    use super::*;

    /// Accepts `limit` bytes, then fails every write with `kind`.
    struct FailingWriter {
        limit: usize,
        kind: io::ErrorKind,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.limit == 0 {
                return Err(io::Error::new(self.kind, "write refused"));
            }
            let n = buf.len().min(self.limit);
            self.limit -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_lines_with_newlines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line(LineKind::Opening, "Hello, World!").unwrap();
        sink.write_line(LineKind::RosterEntry, "1. Go").unwrap();

        assert_eq!(sink.into_inner(), b"Hello, World!\n1. Go\n");
    }

    #[test]
    fn default_tour_bytes() {
        let mut service = TourService::new(WriterSink::new(Vec::new()));
        service.play(&TourScript::default()).unwrap();

        let text = String::from_utf8(service.into_sink().into_inner()).unwrap();
        assert_eq!(
            text,
            "Hello, World!\nHello, Go!\nHello, Go OOP!\n我熟悉的语言:\n1. Go\n2. Python\n3. JavaScript\n4. Rust\n"
        );
    }

    #[test]
    fn io_error_becomes_output_error() {
        let mut sink = WriterSink::new(FailingWriter {
            limit: 4,
            kind: io::ErrorKind::PermissionDenied,
        });
        let err = sink.write_line(LineKind::Opening, "Hello, World!").unwrap_err();

        assert!(matches!(err, HelloError::Output { .. }));
        assert!(err.to_string().contains("write refused"));
    }

    #[test]
    fn broken_pipe_is_closed_output() {
        let mut service = TourService::new(WriterSink::new(FailingWriter {
            limit: 14,
            kind: io::ErrorKind::BrokenPipe,
        }));
        let err = service.play(&TourScript::default()).unwrap_err();

        assert_eq!(err, HelloError::OutputClosed);
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.txt");

        let file = fs::File::create(&path).unwrap();
        let mut service = TourService::new(WriterSink::new(io::BufWriter::new(file)));
        service.play(&TourScript::default()).unwrap();
        drop(service);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(text.ends_with("4. Rust\n"));
    }
}
