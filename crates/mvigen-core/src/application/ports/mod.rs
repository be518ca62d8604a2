//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `mvigen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `FileSink`: Persisting rendered files
//!   - `PackageResolver`: Mapping directories to package names
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in CLI layer, implemented by services)

pub mod output;

pub use output::{FileSink, PackageResolver};
