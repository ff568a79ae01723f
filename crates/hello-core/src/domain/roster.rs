//! The enumerated list of languages printed at the end of a tour.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages listed when no roster is configured, in print order.
pub const DEFAULT_LANGUAGES: [&str; 4] = ["Go", "Python", "JavaScript", "Rust"];

/// Ordered list of language names.
///
/// Order is insertion order; duplicates and empty names are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    languages: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            languages: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Entries with 1-based positions.
    pub fn entries(&self) -> impl Iterator<Item = RosterEntry<'_>> {
        self.languages
            .iter()
            .enumerate()
            .map(|(i, name)| RosterEntry {
                position: i + 1,
                name,
            })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGES)
    }
}

/// One line of the roster: `"{position}. {name}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    pub position: usize,
    pub name: &'a str,
}

impl fmt::Display for RosterEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position, self.name)
    }
}
