//! Configuration management for DRS.
//!
//! Configuration is loaded once at process start from a TOML file in the
//! platform config directory, falling back to defaults when the file is
//! absent. The resulting `Config` is passed by reference into the pipeline.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for DRS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inference endpoint settings
    pub llm: LlmConfig,

    /// Review behavior
    pub review: ReviewConfig,

    /// Web widget settings
    pub server: ServerConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.drs.drs/config.toml
    /// - Linux: ~/.config/drs/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\drs\config\config.toml
    ///
    /// Falls back to ~/.drs/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "drs", "drs")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".drs").join("config.toml")
            })
    }

    /// Get the resolved sample image path (with ~ expansion).
    pub fn sample_image(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.review.sample_image);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
