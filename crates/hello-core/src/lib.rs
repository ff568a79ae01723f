//! Hello Core - the greeting tour as plain data and one small use case.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            hello-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Service (TourService)  │
//! └──────────────────┬──────────────────────┘
//!                    │ writes through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Application Port (LineSink trait)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  hello-adapters (WriterSink, MemorySink)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`Greeter`, `say_hello`, `Roster`, `TourScript`) is pure:
//! no I/O, every operation total.
//!
//! ## Usage
//!
//! ```rust
//! use hello_core::domain::{Greeter, TourScript, say_hello};
//!
//! assert_eq!(say_hello("Go"), "Hello, Go!");
//! assert_eq!(Greeter::new("Go OOP").greet(), "Hello, Go OOP!");
//!
//! let transcript = TourScript::default().transcript();
//! assert_eq!(transcript.len(), 8);
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{LineSink, TourService};
    pub use crate::domain::{
        Greeter, LineKind, Roster, RosterEntry, TourScript, Transcript, TranscriptLine, say_hello,
    };
    pub use crate::error::{HelloError, HelloResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
