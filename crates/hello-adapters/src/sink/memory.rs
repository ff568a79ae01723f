//! In-memory sink adapter for testing.

use std::sync::{Arc, Mutex, MutexGuard};

use hello_core::{application::ports::LineSink, domain::LineKind, error::HelloResult};

/// Records every line it receives.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// service owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    lines: Vec<(LineKind, String)>,
    flushes: usize,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines with their kinds.
    pub fn lines(&self) -> Vec<(LineKind, String)> {
        self.lock().lines.clone()
    }

    /// Recorded text only.
    pub fn texts(&self) -> Vec<String> {
        self.lock().lines.iter().map(|(_, t)| t.clone()).collect()
    }

    /// How many times `flush` was called.
    pub fn flushes(&self) -> usize {
        self.lock().flushes
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.lines.clear();
        inner.flushes = 0;
    }

    // Poisoning is ignored; recorded lines stay valid.
    fn lock(&self) -> MutexGuard<'_, MemorySinkInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, kind: LineKind, line: &str) -> HelloResult<()> {
        self.lock().lines.push((kind, line.to_owned()));
        Ok(())
    }

    fn flush(&mut self) -> HelloResult<()> {
        self.lock().flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hello_core::application::TourService;
    use hello_core::domain::{Roster, TourScript};

    use super::*;

    #[test]
    fn records_kinds_and_text() {
        let sink = MemorySink::new();
        let mut service = TourService::new(sink.clone());
        service.play(&TourScript::default()).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[3], (LineKind::Header, "我熟悉的语言:".to_string()));
        assert_eq!(sink.flushes(), 1);
    }

    #[test]
    fn list_records_roster_only() {
        let sink = MemorySink::new();
        TourService::new(sink.clone())
            .list(&Roster::default())
            .unwrap();

        assert_eq!(sink.texts(), ["1. Go", "2. Python", "3. JavaScript", "4. Rust"]);
    }

    #[test]
    fn clear_resets() {
        let mut sink = MemorySink::new();
        sink.write_line(LineKind::Opening, "x").unwrap();
        sink.clear();
        assert!(sink.lines().is_empty());
        assert_eq!(sink.flushes(), 0);
    }
}
