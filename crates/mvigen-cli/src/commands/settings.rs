//! Implementation of the `mvigen settings` subcommands.

use std::str::FromStr;

use tracing::{info, instrument};

use mvigen_adapters::SettingsFile;
use mvigen_core::domain::{PathKey, TypePathSettings};

use crate::{
    cli::SettingsCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a `mvigen settings` subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: SettingsCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = SettingsFile::new(config.settings_path());

    match cmd {
        SettingsCommands::Get { key } => {
            let key = parse_key(&key)?;
            let settings = store.load().map_err(CliError::Core)?;
            output.print(settings.get(key))?;
            Ok(())
        }

        SettingsCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            let mut settings = store.load().map_err(CliError::Core)?;
            settings.set(key, value.clone());
            store.save(&settings).map_err(CliError::Core)?;
            info!(%key, %value, "setting updated");
            output.success(&format!("{key} = {value}"))?;
            Ok(())
        }

        SettingsCommands::List => {
            let settings = store.load().map_err(CliError::Core)?;
            output.header("Base-type paths")?;
            for key in PathKey::ALL {
                let value = settings.get(key);
                let shown = if value.trim().is_empty() { "(not set)" } else { value };
                output.print(&format!("  {:<20} {}", key.to_string(), shown))?;
            }
            let missing = settings.missing_keys();
            if missing.is_empty() {
                output.success("All required paths are configured")?;
            } else {
                output.warning(&format!("{} required path(s) missing:", missing.len()))?;
                for label in missing {
                    output.print(&format!("  \u{2022} {label}"))?;
                }
            }
            Ok(())
        }

        SettingsCommands::Path => {
            output.print(&store.path().display().to_string())?;
            Ok(())
        }

        SettingsCommands::Init { force } => {
            if store.path().exists() && !force {
                return Err(CliError::SettingsExist {
                    path: store.path().to_path_buf(),
                });
            }
            store.save(&TypePathSettings::default()).map_err(CliError::Core)?;
            output.success(&format!("Settings written to {}", store.path().display()))?;
            Ok(())
        }
    }
}

fn parse_key(raw: &str) -> CliResult<PathKey> {
    PathKey::from_str(raw).map_err(|_| CliError::UnknownSettingsKey { key: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_parse() {
        assert_eq!(parse_key("view-model").unwrap(), PathKey::ViewModel);
        assert_eq!(parse_key("composable-route").unwrap(), PathKey::ComposableRoute);
    }

    #[test]
    fn unknown_key_maps_to_cli_error() {
        assert!(matches!(
            parse_key("viewmodel-path"),
            Err(CliError::UnknownSettingsKey { .. })
        ));
    }
}
