//! The tour: a fixed sequence of greeting lines, captured as data.
//!
//! A [`TourScript`] holds the inputs of one run. [`TourScript::transcript`]
//! turns them into a [`Transcript`] without doing any I/O, so the same lines
//! can be printed, styled, or serialised by whoever consumes them.
//!
//! Section order is fixed:
//!
//! 1. opening line
//! 2. `say_hello(subject)`
//! 3. `greeter.greet()`
//! 4. roster header
//! 5. one `"{n}. {name}"` line per roster entry

use serde::{Deserialize, Serialize};

use crate::domain::{
    greeting::{Greeter, say_hello},
    roster::Roster,
};

pub const DEFAULT_OPENING: &str = "Hello, World!";
pub const DEFAULT_SUBJECT: &str = "Go";
pub const DEFAULT_GREETER: &str = "Go OOP";
pub const DEFAULT_HEADER: &str = "我熟悉的语言:";

/// Which section of the tour a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Opening,
    FunctionGreeting,
    MethodGreeting,
    Header,
    RosterEntry,
}

impl LineKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Opening => "opening",
            Self::FunctionGreeting => "function-greeting",
            Self::MethodGreeting => "method-greeting",
            Self::Header => "header",
            Self::RosterEntry => "roster-entry",
        }
    }
}

/// Inputs for one tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourScript {
    pub opening: String,
    pub subject: String,
    pub greeter: Greeter,
    pub header: String,
    pub roster: Roster,
}

impl Default for TourScript {
    fn default() -> Self {
        Self {
            opening: DEFAULT_OPENING.into(),
            subject: DEFAULT_SUBJECT.into(),
            greeter: Greeter::new(DEFAULT_GREETER),
            header: DEFAULT_HEADER.into(),
            roster: Roster::default(),
        }
    }
}

impl TourScript {
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_greeter(mut self, greeter: Greeter) -> Self {
        self.greeter = greeter;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Produce the lines of this tour in print order.
    pub fn transcript(&self) -> Transcript {
        let mut lines = Vec::with_capacity(4 + self.roster.len());

        lines.push(TranscriptLine::new(LineKind::Opening, self.opening.clone()));
        lines.push(TranscriptLine::new(
            LineKind::FunctionGreeting,
            say_hello(&self.subject),
        ));
        lines.push(TranscriptLine::new(
            LineKind::MethodGreeting,
            self.greeter.greet(),
        ));
        lines.push(TranscriptLine::new(LineKind::Header, self.header.clone()));
        lines.extend(
            self.roster
                .entries()
                .map(|entry| TranscriptLine::new(LineKind::RosterEntry, entry.to_string())),
        );

        Transcript { lines }
    }
}

/// A single printed line and the section it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Ordered output of a tour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
}

impl Transcript {
    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of the given kind, in order.
    pub fn of_kind(&self, kind: LineKind) -> impl Iterator<Item = &TranscriptLine> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    /// All lines joined by `\n`, with a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptLine;
    type IntoIter = std::slice::Iter<'a, TranscriptLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "Hello, World!\n\
                            Hello, Go!\n\
                            Hello, Go OOP!\n\
                            我熟悉的语言:\n\
                            1. Go\n\
                            2. Python\n\
                            3. JavaScript\n\
                            4. Rust\n";

    #[test]
    fn default_transcript_text() {
        assert_eq!(TourScript::default().transcript().to_text(), EXPECTED);
    }

    #[test]
    fn section_order_is_fixed() {
        let kinds: Vec<LineKind> = TourScript::default()
            .transcript()
            .lines()
            .iter()
            .map(|l| l.kind)
            .collect();

        assert_eq!(
            kinds,
            [
                LineKind::Opening,
                LineKind::FunctionGreeting,
                LineKind::MethodGreeting,
                LineKind::Header,
                LineKind::RosterEntry,
                LineKind::RosterEntry,
                LineKind::RosterEntry,
                LineKind::RosterEntry,
            ]
        );
    }

    #[test]
    fn overrides_flow_into_lines() {
        let transcript = TourScript::default()
            .with_subject("Rust")
            .with_greeter(Greeter::new("Rust OOP"))
            .with_header("Languages:")
            .with_roster(Roster::new(["Rust", "C++"]))
            .transcript();

        assert_eq!(
            transcript.to_text(),
            "Hello, World!\nHello, Rust!\nHello, Rust OOP!\nLanguages:\n1. Rust\n2. C++\n"
        );
    }

    #[test]
    fn empty_roster_keeps_header() {
        let transcript = TourScript::default()
            .with_roster(Roster::empty())
            .transcript();

        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.of_kind(LineKind::Header).count(), 1);
        assert_eq!(transcript.of_kind(LineKind::RosterEntry).count(), 0);
    }

    #[test]
    fn transcript_json_shape() {
        let transcript = TourScript::default().transcript();
        let value = serde_json::to_value(&transcript).unwrap();

        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["kind"], "opening");
        assert_eq!(first["text"], "Hello, World!");
        assert_eq!(value[4]["kind"], "roster-entry");
    }

    #[test]
    fn line_kind_str_matches_serde() {
        for kind in [
            LineKind::Opening,
            LineKind::FunctionGreeting,
            LineKind::MethodGreeting,
            LineKind::Header,
            LineKind::RosterEntry,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
