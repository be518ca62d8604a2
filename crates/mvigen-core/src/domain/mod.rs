// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Mvigen.
//!
//! Pure business logic: naming transforms, settings validation, and the
//! file renderers. All I/O goes through ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Pure renderers**: Same inputs always produce byte-identical output

pub mod config;
pub mod error;
pub mod generated;
pub mod generators;
pub mod naming;
pub mod settings;

// Re-exports for convenience
pub use config::{
    EmptyMethodPolicy, FeatureConfig, NavParameter, NavigationStyle, RepoMethod,
    RepositoryConfig, ScreenConfig, StateContainerConfig,
};
pub use error::{DomainError, ErrorCategory};
pub use generated::GeneratedFile;
pub use settings::{PathKey, TypePathSettings};
