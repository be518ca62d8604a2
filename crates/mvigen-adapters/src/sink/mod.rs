//! File sink adapters.

pub mod local;
pub mod memory;

pub use local::LocalFileSink;
pub use memory::MemoryFileSink;
