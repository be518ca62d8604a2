//! Per-run generation configuration bundles.
//!
//! # Design
//!
//! These are immutable value bundles constructed once per "generate" action
//! from whatever surface collected them (CLI flags here, a dialog in other
//! hosts), read during generation, and discarded. No generator mutates its
//! config, and nothing here is cached between runs.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── NavigationStyle ───────────────────────────────────────────────────────────

/// How the generated screen is wired into navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationStyle {
    /// No navigation file.
    #[default]
    None,
    /// String route constant plus extension functions.
    Simple,
    /// `@Serializable` destination type plus typed navigation functions.
    TypeSafe,
}

impl NavigationStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::TypeSafe => "type-safe",
        }
    }
}

impl fmt::Display for NavigationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "simple" => Ok(Self::Simple),
            "type-safe" | "typesafe" | "safe" => Ok(Self::TypeSafe),
            other => Err(DomainError::UnknownPathKey {
                key: format!("navigation style '{other}'"),
            }),
        }
    }
}

// ── EmptyMethodPolicy ─────────────────────────────────────────────────────────

/// What to do when repository generation is requested with no methods.
///
/// The two behaviors both exist in the wild; rather than hard-coding one,
/// the policy travels with the repository config. `Skip` is reported (never
/// errored) through [`crate::application::GenerationReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyMethodPolicy {
    /// Silently skip repository generation; surface the skip in the report.
    #[default]
    Skip,
    /// Refuse the run with an error.
    Fail,
}

// ── Leaf value types ──────────────────────────────────────────────────────────

/// One navigation parameter carried by a type-safe destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavParameter {
    pub name: String,
    pub ty: String,
}

impl NavParameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One repository method signature.
///
/// `parameters` is raw signature text (`"id: String, page: Int"`); it is
/// emitted verbatim, never parsed. A blank `return_type` renders as `Unit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMethod {
    pub name: String,
    pub return_type: String,
    pub parameters: String,
}

impl RepoMethod {
    pub fn new(
        name: impl Into<String>,
        return_type: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: parameters.into(),
        }
    }

    /// Return type as rendered: `Unit` when blank.
    pub fn rendered_return_type(&self) -> &str {
        let trimmed = self.return_type.trim();
        if trimmed.is_empty() { "Unit" } else { trimmed }
    }
}

// ── Per-generator configs ─────────────────────────────────────────────────────

/// Inputs for the state/viewmodel pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateContainerConfig {
    pub feature_name: String,
    pub events_enabled: bool,
    pub refresh_enabled: bool,
    pub ui_state_enabled: bool,
    /// Emit an `init { ... }` block dispatching the load intent on
    /// construction.
    pub load_on_init: bool,
    /// Injectable collaborator names; each becomes a `<Name>UseCase`
    /// constructor parameter.
    pub use_cases: Vec<String>,
}

/// Inputs for the repository interface/implementation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub feature_name: String,
    pub methods: Vec<RepoMethod>,
    pub needs_http_client: bool,
    pub on_empty_methods: EmptyMethodPolicy,
}

/// Inputs for the screen (and optional navigation) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    pub feature_name: String,
    pub navigation_style: NavigationStyle,
    pub nav_parameters: Vec<NavParameter>,
    pub has_navigation_back: bool,
    /// Whether the route function receives an injected viewmodel. Set by the
    /// feature orchestrator to mirror whether a viewmodel is actually
    /// generated in the same run.
    pub inject_view_model: bool,
}

// ── FeatureConfig ─────────────────────────────────────────────────────────────

/// Union config for a full-feature run: three independently toggled
/// sub-generations sharing one feature name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureConfig {
    pub feature_name: String,

    pub generate_screen: bool,
    pub generate_view_model: bool,
    pub generate_repository: bool,

    // viewmodel
    pub events_enabled: bool,
    pub refresh_enabled: bool,
    pub ui_state_enabled: bool,
    pub load_on_init: bool,
    pub use_cases: Vec<String>,

    // repository
    pub methods: Vec<RepoMethod>,
    pub needs_http_client: bool,
    pub on_empty_methods: EmptyMethodPolicy,

    // screen
    pub navigation_style: NavigationStyle,
    pub nav_parameters: Vec<NavParameter>,
    pub has_navigation_back: bool,
}

impl FeatureConfig {
    pub fn state_container(&self) -> StateContainerConfig {
        StateContainerConfig {
            feature_name: self.feature_name.clone(),
            events_enabled: self.events_enabled,
            refresh_enabled: self.refresh_enabled,
            ui_state_enabled: self.ui_state_enabled,
            load_on_init: self.load_on_init,
            use_cases: self.use_cases.clone(),
        }
    }

    pub fn repository(&self) -> RepositoryConfig {
        RepositoryConfig {
            feature_name: self.feature_name.clone(),
            methods: self.methods.clone(),
            needs_http_client: self.needs_http_client,
            on_empty_methods: self.on_empty_methods,
        }
    }

    /// Screen config for this run. The viewmodel is injected into the route
    /// function exactly when this run also generates one.
    pub fn screen(&self) -> ScreenConfig {
        ScreenConfig {
            feature_name: self.feature_name.clone(),
            navigation_style: self.navigation_style,
            nav_parameters: self.nav_parameters.clone(),
            has_navigation_back: self.has_navigation_back,
            inject_view_model: self.generate_view_model,
        }
    }
}
