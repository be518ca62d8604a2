//! TOML persistence for the base-type path settings.

use std::path::{Path, PathBuf};

use mvigen_core::{
    domain::TypePathSettings,
    error::{MvigenError, MvigenResult},
};
use tracing::debug;

/// Settings store backed by a TOML file.
///
/// A missing file is not an error: it loads as the defaults, and the
/// first `save` creates it (parents included).
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> MvigenResult<TypePathSettings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "settings file missing, using defaults");
            return Ok(TypePathSettings::default());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.error("read", e))?;
        toml::from_str(&raw).map_err(|e| self.error("parse", e))
    }

    pub fn save(&self, settings: &TypePathSettings) -> MvigenResult<()> {
        let raw = toml::to_string_pretty(settings).map_err(|e| self.error("serialize", e))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.error("create directory for", e))?;
        }
        std::fs::write(&self.path, raw).map_err(|e| self.error("write", e))?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    fn error(&self, operation: &str, e: impl std::fmt::Display) -> MvigenError {
        MvigenError::Configuration {
            message: format!("Failed to {} settings file {}: {}", operation, self.path.display(), e),
        }
    }
}
