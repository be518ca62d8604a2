//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mvigen-adapters` crate provides implementations.

use crate::error::MvigenResult;
use std::path::Path;

/// Port for persisting rendered files.
///
/// Implemented by:
/// - `mvigen_adapters::sink::LocalFileSink` (production)
/// - `mvigen_adapters::sink::MemoryFileSink` (testing)
///
/// ## Design Notes
///
/// - The sink creates `directory` (and parents) as needed
/// - An existing file with the same name is overwritten
#[cfg_attr(test, mockall::automock)]
pub trait FileSink: Send + Sync {
    /// Write `content` to `file_name` inside `directory`.
    fn write(&self, directory: &Path, file_name: &str, content: &str) -> MvigenResult<()>;
}

/// Port for resolving the package name of a directory.
///
/// Implemented by:
/// - `mvigen_adapters::package_resolver::SourceRootResolver` (production)
///
/// Resolution never fails: a directory outside any recognizable source
/// root resolves to the empty string, which renderers treat as the
/// default package.
#[cfg_attr(test, mockall::automock)]
pub trait PackageResolver: Send + Sync {
    /// Dotted package name for `directory`, or `""` for the default package.
    fn resolve(&self, directory: &Path) -> String;
}
