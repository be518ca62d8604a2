//! Mvigen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Mvigen
//! MVI feature generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           mvigen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GenerationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: FileSink, PackageResolver)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mvigen-adapters (Infrastructure)    │
//! │ (LocalFileSink, SourceRootResolver, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (TypePathSettings, naming, renderers)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mvigen_core::{
//!     application::GenerationService,
//!     domain::{StateContainerConfig, TypePathSettings},
//! };
//! use std::path::Path;
//!
//! # fn demo(sink: Box<dyn mvigen_core::application::FileSink>,
//! #         resolver: Box<dyn mvigen_core::application::PackageResolver>)
//! #         -> mvigen_core::error::MvigenResult<()> {
//! let service = GenerationService::new(sink, resolver, TypePathSettings::default());
//! let config = StateContainerConfig {
//!     feature_name: "home".into(),
//!     events_enabled: false,
//!     refresh_enabled: false,
//!     ui_state_enabled: true,
//!     load_on_init: false,
//!     use_cases: vec![],
//! };
//! let report = service.generate_state_container(&config, Path::new("./src"))?;
//! println!("wrote {} files", report.files.len());
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationService,
        ports::{FileSink, PackageResolver},
    };
    pub use crate::domain::{
        EmptyMethodPolicy, FeatureConfig, GeneratedFile, NavParameter, NavigationStyle, PathKey,
        RepoMethod, RepositoryConfig, ScreenConfig, StateContainerConfig, TypePathSettings,
    };
    pub use crate::error::{MvigenError, MvigenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
