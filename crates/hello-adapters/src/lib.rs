//! Infrastructure adapters for hello.
//!
//! This crate implements the ports defined in `hello_core::application::ports`.
//! It contains all the I/O.

pub mod sink;

// Re-export commonly used adapters
pub use sink::{MemorySink, WriterSink};
