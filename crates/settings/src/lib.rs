//! Relaycheck Settings
//!
//! Configuration file management for the relaycheck CLI.
//!
//! ## Features
//!
//! - Validator settings (majority policy, majority size)
//! - Logging settings
//! - JSON serialization, `~/.relaycheck/settings.json` by default
//!
//! ## Usage
//!
//! ```no_run
//! use relaycheck_settings::Settings;
//!
//! let mut settings = Settings::load_or_default()?;
//! settings.validator.majority_size = 2;
//! settings.save()?;
//! # Ok::<(), relaycheck_settings::SettingsError>(())
//! ```

mod config;

pub use config::{LoggingSettings, Settings, ValidatorSettings};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    ReadError(std::io::Error),

    #[error("Failed to write settings: {0}")]
    WriteError(std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(serde_json::Error),

    #[error("Failed to create config directory: {0}")]
    CreateDirError(std::io::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Directory holding relaycheck configuration
pub fn default_config_dir() -> PathBuf {
    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".relaycheck")
}

/// Get the default settings file path
pub fn default_settings_path() -> PathBuf {
    default_config_dir().join("settings.json")
}
