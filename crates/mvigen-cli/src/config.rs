//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, else the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation defaults applied when the matching flag is absent.
    pub generation: GenerationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Override for the settings-file location.
    pub settings_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Default source root for package resolution.
    pub source_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        use anyhow::Context as _;

        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mvigen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mvigen", "mvigen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mvigen.toml"))
    }

    /// Path to the base-type settings file, honoring the config override
    /// and the `MVIGEN_SETTINGS` environment variable.
    pub fn settings_path(&self) -> PathBuf {
        if let Ok(env_path) = std::env::var("MVIGEN_SETTINGS") {
            return PathBuf::from(env_path);
        }
        if let Some(path) = &self.settings_file {
            return path.clone();
        }
        directories::ProjectDirs::from("com", "mvigen", "mvigen")
            .map(|d| d.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from(".mvigen-settings.toml"))
    }
}
