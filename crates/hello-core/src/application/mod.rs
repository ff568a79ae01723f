//! Application layer for the greeting tour.
//!
//! - **Ports**: [`LineSink`], the one thing the tour needs from the outside
//! - **Services**: [`TourService`], which plays a script into a sink
//!
//! No business logic lives here; the lines themselves come from
//! `crate::domain`.

pub mod ports;
pub mod services;

pub use ports::LineSink;
pub use services::TourService;
