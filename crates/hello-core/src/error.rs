//! Unified error handling for Hello Core.
//!
//! The domain is total, so every variant here comes from the edges: a sink
//! that failed to write, or one whose reader went away.

use thiserror::Error;

/// Root error type for Hello Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelloError {
    /// A line sink failed to accept output.
    #[error("Output error: {reason}")]
    Output { reason: String },

    /// The reader of a sink went away (a closed pipe). Not a failure of
    /// the tour; callers end quietly.
    #[error("Output closed by the reader")]
    OutputClosed,
}

impl HelloError {
    pub fn output(reason: impl Into<String>) -> Self {
        Self::Output {
            reason: reason.into(),
        }
    }

    /// `true` when output stopped because nobody is reading any more.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::OutputClosed)
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Output { .. } => vec![
                "Check that the output destination is writable".into(),
                "Try redirecting to a file: hello > tour.txt".into(),
            ],
            Self::OutputClosed => Vec::new(),
        }
    }
}

/// Convenient result type alias.
pub type HelloResult<T> = Result<T, HelloError>;
