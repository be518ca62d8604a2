// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The feature name contains nothing usable after the casing transforms.
    #[error("feature name '{name}' is blank after normalization")]
    BlankFeatureName { name: String },

    /// One or more required settings paths are blank. Checked eagerly,
    /// before any file is rendered; carries the complete missing list.
    #[error("settings incomplete: {} required path(s) missing", missing.len())]
    SettingsIncomplete { missing: Vec<String> },

    /// A settings key string did not name a recognized capability.
    #[error("unknown settings key: {key}")]
    UnknownPathKey { key: String },

    /// A repository method spec could not be parsed.
    #[error("invalid method spec '{spec}': {reason}")]
    InvalidMethodSpec { spec: String, reason: String },

    /// A navigation parameter spec could not be parsed.
    #[error("invalid navigation parameter '{spec}': expected name:Type")]
    InvalidNavParameter { spec: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BlankFeatureName { name } => vec![
                format!("'{}' reduces to an empty name", name),
                "Use letters and digits, e.g. 'Forget Password' or 'userProfile'".into(),
            ],
            Self::SettingsIncomplete { missing } => {
                let mut out = vec!["Configure the following paths first:".to_string()];
                out.extend(missing.iter().map(|m| format!("  \u{2022} {m}")));
                out.push("Run: mvigen settings list".into());
                out
            }
            Self::UnknownPathKey { key } => vec![
                format!("'{}' is not a settings key", key),
                "Run 'mvigen settings list' to see the recognized keys".into(),
            ],
            Self::InvalidMethodSpec { .. } => vec![
                "Method specs look like a signature:".into(),
                "  getUsers() -> List<User>".into(),
                "  getUser(id: String) -> User".into(),
                "The return type may be omitted (defaults to Unit)".into(),
            ],
            Self::InvalidNavParameter { .. } => {
                vec!["Navigation parameters look like: id:String".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SettingsIncomplete { .. } => ErrorCategory::Configuration,
            Self::BlankFeatureName { .. }
            | Self::UnknownPathKey { .. }
            | Self::InvalidMethodSpec { .. }
            | Self::InvalidNavParameter { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
