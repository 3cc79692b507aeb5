//! Global palco configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{PalcoError, PalcoResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/palco";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/palco/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct PalcoConfig {
    /// Where the persisted JSON records live.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for PalcoConfig {
    fn default() -> Self {
        PalcoConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl PalcoConfig {
    pub fn config_path() -> PalcoResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PalcoError::Config("Could not determine config directory".into()))?
            .join("palco");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented default file on first
    /// run.
    pub fn load() -> PalcoResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: PalcoConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| PalcoError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PalcoError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory in usable form, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/palco/config.toml
    pub fn save(&self) -> PalcoResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| PalcoError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| PalcoError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> PalcoResult<()> {
        let contents = format!(
            "\
# palco configuration

# Where your accounts and events are stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PalcoError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PalcoError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
