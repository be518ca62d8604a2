//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The file sink failed to persist a rendered file.
    #[error("Failed to write {path}: {reason}")]
    SinkWrite { path: PathBuf, reason: String },

    /// Repository generation was requested with no methods under the
    /// `Fail` policy.
    #[error("Repository for '{feature}' has no methods")]
    EmptyMethodList { feature: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SinkWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the target directory is not read-only".into(),
            ],
            Self::EmptyMethodList { .. } => vec![
                "Declare at least one method with --method 'name() -> Type'".into(),
                "Or pass --on-empty-methods skip to omit the repository".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SinkWrite { .. } => ErrorCategory::Internal,
            Self::EmptyMethodList { .. } => ErrorCategory::Validation,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
