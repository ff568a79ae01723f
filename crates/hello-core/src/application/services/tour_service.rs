//! Tour Service - plays a [`TourScript`] into a [`LineSink`].

use tracing::{debug, instrument, trace};

use crate::{
    application::ports::LineSink,
    domain::{LineKind, Roster, TourScript, Transcript},
    error::HelloResult,
};

/// Service that writes tours to a sink.
pub struct TourService<S> {
    sink: S,
}

impl<S: LineSink> TourService<S> {
    /// Create a new tour service.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Write every line of `script` in order and flush.
    ///
    /// Returns the number of lines written. Stops at the first sink error;
    /// lines already written stay written.
    #[instrument(skip_all, fields(roster_len = script.roster.len()))]
    pub fn play(&mut self, script: &TourScript) -> HelloResult<usize> {
        let transcript = script.transcript();
        let written = self.write_transcript(&transcript)?;
        debug!(lines = written, "tour played");
        Ok(written)
    }

    /// Write only the enumerated roster lines.
    #[instrument(skip_all, fields(roster_len = roster.len()))]
    pub fn list(&mut self, roster: &Roster) -> HelloResult<usize> {
        let mut written = 0;
        for entry in roster.entries() {
            self.sink
                .write_line(LineKind::RosterEntry, &entry.to_string())?;
            written += 1;
        }
        self.sink.flush()?;
        Ok(written)
    }

    /// Write a pre-built transcript.
    pub fn write_transcript(&mut self, transcript: &Transcript) -> HelloResult<usize> {
        for line in transcript {
            trace!(kind = line.kind.as_str(), "write line");
            self.sink.write_line(line.kind, &line.text)?;
        }
        self.sink.flush()?;
        Ok(transcript.len())
    }

    /// Consume the service and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::ports::MockLineSink;
    use crate::domain::Greeter;
    use crate::error::HelloError;

    #[test]
    fn play_writes_lines_in_order() {
        let mut sink = MockLineSink::new();
        let mut seq = Sequence::new();

        let expected = [
            (LineKind::Opening, "Hello, World!"),
            (LineKind::FunctionGreeting, "Hello, Go!"),
            (LineKind::MethodGreeting, "Hello, Go OOP!"),
            (LineKind::Header, "我熟悉的语言:"),
            (LineKind::RosterEntry, "1. Go"),
            (LineKind::RosterEntry, "2. Python"),
            (LineKind::RosterEntry, "3. JavaScript"),
            (LineKind::RosterEntry, "4. Rust"),
        ];
        for (kind, text) in expected {
            sink.expect_write_line()
                .withf(move |k, line| *k == kind && line == text)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        sink.expect_flush()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let mut service = TourService::new(sink);
        assert_eq!(service.play(&TourScript::default()).unwrap(), 8);
    }

    #[test]
    fn play_stops_at_first_failure() {
        let mut sink = MockLineSink::new();
        let mut calls = 0;
        sink.expect_write_line().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 2 {
                Err(HelloError::output("closed"))
            } else {
                Ok(())
            }
        });
        sink.expect_flush().never();

        let mut service = TourService::new(sink);
        let err = service.play(&TourScript::default()).unwrap_err();
        assert_eq!(err, HelloError::output("closed"));
    }

    #[test]
    fn flush_failure_propagates() {
        let mut sink = MockLineSink::new();
        sink.expect_write_line().returning(|_, _| Ok(()));
        sink.expect_flush()
            .returning(|| Err(HelloError::output("flush")));

        let mut service = TourService::new(sink);
        assert!(service.play(&TourScript::default()).is_err());
    }

    #[test]
    fn list_writes_only_roster() {
        let mut sink = MockLineSink::new();
        sink.expect_write_line()
            .withf(|kind, _| *kind == LineKind::RosterEntry)
            .times(2)
            .returning(|_, _| Ok(()));
        sink.expect_flush().times(1).returning(|| Ok(()));

        let mut service = TourService::new(sink);
        assert_eq!(service.list(&Roster::new(["Rust", "Go"])).unwrap(), 2);
    }

    #[test]
    fn custom_script_line_count() {
        let mut sink = MockLineSink::new();
        sink.expect_write_line().times(5).returning(|_, _| Ok(()));
        sink.expect_flush().returning(|| Ok(()));

        let script = TourScript::default()
            .with_greeter(Greeter::new("Rust OOP"))
            .with_roster(Roster::new(["Rust"]));

        let mut service = TourService::new(&mut sink);
        assert_eq!(service.play(&script).unwrap(), 5);
    }
}
