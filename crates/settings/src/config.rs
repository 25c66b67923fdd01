//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use relaycheck_logging::DEFAULT_FILTER;
use relaycheck_validator::{MajorityPolicy, ValidatorConfig};

use crate::{default_settings_path, Result, SettingsError};

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Challenge validation settings
    #[serde(default)]
    pub validator: ValidatorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Custom settings file path (not serialized)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default path, or create defaults
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(&default_settings_path())
    }

    /// Load settings from a specific path, or create defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(SettingsError::ReadError)?;
            let mut settings: Settings =
                serde_json::from_str(&content).map_err(SettingsError::ParseError)?;
            settings.config_path = Some(path.to_path_buf());
            info!("Loaded settings from {:?}", path);
            Ok(settings)
        } else {
            let mut settings = Self::default();
            settings.config_path = Some(path.to_path_buf());
            Ok(settings)
        }
    }

    /// Save settings to the configured path
    pub fn save(&self) -> Result<()> {
        let path = self.config_path.clone().unwrap_or_else(default_settings_path);
        self.save_to(&path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(SettingsError::CreateDirError)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(SettingsError::ParseError)?;
        std::fs::write(path, content).map_err(SettingsError::WriteError)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Challenge validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorSettings {
    /// How majority relays combine into one outcome
    #[serde(default)]
    pub majority_policy: MajorityPolicy,

    /// Exact number of relays in a majority response
    #[serde(default = "default_majority_size")]
    pub majority_size: usize,
}

fn default_majority_size() -> usize {
    ValidatorConfig::default().majority_size
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            majority_policy: MajorityPolicy::default(),
            majority_size: default_majority_size(),
        }
    }
}

impl ValidatorSettings {
    pub fn to_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            majority_policy: self.majority_policy,
            majority_size: self.majority_size,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
