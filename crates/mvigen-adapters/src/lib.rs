//! Infrastructure adapters for Mvigen.
//!
//! This crate implements the ports defined in `mvigen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod package_resolver;
pub mod settings_file;
pub mod sink;

// Re-export commonly used adapters
pub use package_resolver::SourceRootResolver;
pub use settings_file::SettingsFile;
pub use sink::{LocalFileSink, MemoryFileSink};
