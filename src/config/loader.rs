use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{LauncherConfig, RuntimeKind};

/// Settings file name, relative to the install directory.
pub const CONFIG_FILE_NAME: &str = "launcher.toml";

/// Errors that can occur when loading launcher settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl LauncherConfig {
    /// Path of the settings file inside `dir`.
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Loads settings from `launcher.toml` in `dir`.
    ///
    /// - If the file doesn't exist, returns `LauncherConfig::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path(dir))
    }

    /// Loads settings from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(LauncherConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: LauncherConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the settings.
    ///
    /// Checks:
    /// - Option limits are at least 1
    /// - The field used by the selected runtime kind is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.options.max_options == 0 {
            return Err(validation("options.max_options must be at least 1"));
        }
        if self.options.max_line_length == 0 {
            return Err(validation("options.max_line_length must be at least 1"));
        }

        match self.runtime.kind {
            RuntimeKind::Library => {
                if self.runtime.library.as_os_str().is_empty() {
                    return Err(validation("runtime.library must not be empty"));
                }
                if self.runtime.entry.is_empty() {
                    return Err(validation("runtime.entry must not be empty"));
                }
            }
            RuntimeKind::Process => {
                if self.runtime.program.as_os_str().is_empty() {
                    return Err(validation("runtime.program must not be empty"));
                }
            }
        }

        Ok(())
    }
}

fn validation(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
