//! Base-type import path settings.
//!
//! # Design
//!
//! Generated files extend a handful of base types that live in the consuming
//! codebase (`AppViewModel`, `BaseState`, the navigation helpers, ...).
//! Their dotted import paths are configurable; [`TypePathSettings`] is the
//! resolved, validated bundle that every generator reads.
//!
//! There is deliberately no ambient singleton here: callers load the settings
//! once and pass them down into [`crate::application::GenerationService`].
//! Storage mechanics (TOML file, location) live in the adapters/CLI layers;
//! this module only owns the shape and the validation rule.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PathKey ───────────────────────────────────────────────────────────────────

/// The ten recognized base-type capabilities a generated file may reference.
///
/// All but [`PathKey::DiModule`] are required before any generation may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathKey {
    /// Controller base class (`AppViewModel<S, E, U, I>`).
    ViewModel,
    /// Capability-flag bundle passed to the controller base constructor.
    ViewModelConfig,
    /// Base interface for the sealed state hierarchy.
    State,
    /// Base interface for the sealed event hierarchy.
    Event,
    /// Base interface for the UI-state record.
    UiState,
    /// Refresh capability attached to the UI-state when refresh is enabled.
    Refreshable,
    /// Base interface for the sealed intent hierarchy.
    Intent,
    /// Route-registration helper used by simple navigation.
    ComposableRoute,
    /// Typed route-registration helper used by type-safe navigation.
    ComposableSafeType,
    /// DI module path. Stored for future use; never validated.
    DiModule,
}

impl PathKey {
    /// All keys, in the order they are reported and persisted.
    pub const ALL: [PathKey; 10] = [
        Self::ViewModel,
        Self::ViewModelConfig,
        Self::State,
        Self::Event,
        Self::UiState,
        Self::Refreshable,
        Self::Intent,
        Self::ComposableRoute,
        Self::ComposableSafeType,
        Self::DiModule,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ViewModel => "view-model",
            Self::ViewModelConfig => "view-model-config",
            Self::State => "state",
            Self::Event => "event",
            Self::UiState => "ui-state",
            Self::Refreshable => "refreshable",
            Self::Intent => "intent",
            Self::ComposableRoute => "composable-route",
            Self::ComposableSafeType => "composable-safe-type",
            Self::DiModule => "di-module",
        }
    }

    /// Human label used in validation error reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ViewModel => "AppViewModel path",
            Self::ViewModelConfig => "ViewModelConfig path",
            Self::State => "BaseState path",
            Self::Event => "BaseEvent path",
            Self::UiState => "BaseUIState path",
            Self::Refreshable => "Refreshable path",
            Self::Intent => "BaseIntent path",
            Self::ComposableRoute => "composableRoute path",
            Self::ComposableSafeType => "composableSafeType path",
            Self::DiModule => "DI module path",
        }
    }

    /// Whether a blank value for this key blocks generation.
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::DiModule)
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        PathKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == lowered)
            .ok_or_else(|| DomainError::UnknownPathKey { key: s.to_string() })
    }
}

// ── TypePathSettings ──────────────────────────────────────────────────────────

/// Resolved import paths for every base type the generators reference.
///
/// Defaults point at the `com.afapps.core` convention; consuming codebases
/// override them through the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TypePathSettings {
    pub view_model: String,
    pub view_model_config: String,
    pub state: String,
    pub event: String,
    pub ui_state: String,
    pub refreshable: String,
    pub intent: String,
    pub composable_route: String,
    pub composable_safe_type: String,
    pub di_module: String,
}

impl Default for TypePathSettings {
    fn default() -> Self {
        Self {
            view_model: "com.afapps.core.viewmodel.AppViewModel".into(),
            view_model_config: "com.afapps.core.viewmodel.ViewModelConfig".into(),
            state: "com.afapps.core.viewmodel.BaseState".into(),
            event: "com.afapps.core.viewmodel.BaseEvent".into(),
            ui_state: "com.afapps.core.viewmodel.BaseUIState".into(),
            refreshable: "com.afapps.core.viewmodel.Refreshable".into(),
            intent: "com.afapps.core.viewmodel.BaseIntent".into(),
            composable_route: "com.afapps.core.utilities.composableRoute".into(),
            composable_safe_type: "com.afapps.core.utilities.composableSafeType".into(),
            di_module: String::new(),
        }
    }
}

impl TypePathSettings {
    /// Dotted path for a key.
    pub fn get(&self, key: PathKey) -> &str {
        match key {
            PathKey::ViewModel => &self.view_model,
            PathKey::ViewModelConfig => &self.view_model_config,
            PathKey::State => &self.state,
            PathKey::Event => &self.event,
            PathKey::UiState => &self.ui_state,
            PathKey::Refreshable => &self.refreshable,
            PathKey::Intent => &self.intent,
            PathKey::ComposableRoute => &self.composable_route,
            PathKey::ComposableSafeType => &self.composable_safe_type,
            PathKey::DiModule => &self.di_module,
        }
    }

    pub fn set(&mut self, key: PathKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            PathKey::ViewModel => self.view_model = value,
            PathKey::ViewModelConfig => self.view_model_config = value,
            PathKey::State => self.state = value,
            PathKey::Event => self.event = value,
            PathKey::UiState => self.ui_state = value,
            PathKey::Refreshable => self.refreshable = value,
            PathKey::Intent => self.intent = value,
            PathKey::ComposableRoute => self.composable_route = value,
            PathKey::ComposableSafeType => self.composable_safe_type = value,
            PathKey::DiModule => self.di_module = value,
        }
    }

    /// Simple name of the type behind a key (last dotted segment).
    pub fn simple_name_of(&self, key: PathKey) -> &str {
        simple_name(self.get(key))
    }

    /// `true` when every required key is non-blank.
    pub fn is_valid(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Human labels of every required key that is still blank, in
    /// [`PathKey::ALL`] order. Complete list, not just the first offender.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        PathKey::ALL
            .iter()
            .filter(|k| k.is_required() && self.get(**k).trim().is_empty())
            .map(|k| k.label())
            .collect()
    }

    /// Eager validation gate run before any file is rendered or written.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_keys();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::SettingsIncomplete {
                missing: missing.into_iter().map(String::from).collect(),
            })
        }
    }
}

/// Substring after the last `.`; the whole string when there is no `.`.
pub fn simple_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
