//! Domain layer for the greeting tour.
//!
//! Pure values and functions only:
//!
//! - **No I/O**: printing happens through `application::ports::LineSink`
//! - **No errors**: every operation here is total
//! - **No external crates**: std + serde derives

pub mod greeting;
pub mod roster;
pub mod tour;

pub use greeting::{Greeter, say_hello};
pub use roster::{DEFAULT_LANGUAGES, Roster, RosterEntry};
pub use tour::{
    DEFAULT_GREETER, DEFAULT_HEADER, DEFAULT_OPENING, DEFAULT_SUBJECT, LineKind, TourScript,
    Transcript, TranscriptLine,
};
