//! Configuration file handling for ~/.communefinder/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Settings
//! structs live in [`super::settings`], parsing in [`super::parser`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use super::settings::*;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.communefinder/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_config_string())
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Serialize as INI text.
    fn to_config_string(&self) -> String {
        format!(
            "[dataset]\n\
             url = {}\n\
             name_property = {}\n\
             \n\
             [style]\n\
             border_color = {}\n\
             fill_color = {}\n\
             fill_opacity = {}\n\
             highlight_color = {}\n\
             highlight_opacity = {}\n\
             marker_color = {}\n\
             marker_opacity = {}\n\
             \n\
             [probe]\n\
             timeout = {}\n\
             servers = {}\n",
            self.dataset.url,
            self.dataset.name_property,
            self.style.border_color,
            self.style.fill_color,
            self.style.fill_opacity,
            self.style.highlight_color,
            self.style.highlight_opacity,
            self.style.marker_color,
            self.style.marker_opacity,
            self.probe.timeout,
            self.probe.servers.join(","),
        )
    }
}

/// Get the path to the config directory (~/.communefinder).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".communefinder")
}

/// Get the path to the config file (~/.communefinder/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
