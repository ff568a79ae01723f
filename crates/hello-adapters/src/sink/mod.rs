//! Line sink adapters.

mod memory;
mod writer;

pub use memory::MemorySink;
pub use writer::WriterSink;
