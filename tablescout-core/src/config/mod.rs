//! Application configuration.
//!
//! Configuration resolves in three layers: built-in defaults, environment
//! variables (`TABLESCOUT_*`), and an optional TOML file. The binary's
//! command-line flags override all of them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

mod error;

pub use error::ConfigError;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage locations
    pub storage: StorageConfig,

    /// Startup display language
    pub language: String,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Where the application keeps its data files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding all application data files
    pub data_dir: PathBuf,

    /// Credential file name inside the data directory
    pub users_file: String,

    /// Restaurant catalog file; the built-in seed is used when unset
    pub catalog_file: Option<PathBuf>,

    /// Language table file; the built-in table is used when unset
    pub language_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON formatting
    pub json_format: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            language: "en".to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tablescout");

        Self {
            data_dir,
            users_file: "users.json".to_string(),
            catalog_file: None,
            language_file: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables follow the pattern `TABLESCOUT_<KEY>`, for example
    /// `TABLESCOUT_DATA_DIR=/tmp/tablescout`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(dir) = env::var("TABLESCOUT_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("TABLESCOUT_USERS_FILE") {
            config.storage.users_file = file;
        }
        if let Ok(path) = env::var("TABLESCOUT_CATALOG_FILE") {
            config.storage.catalog_file = Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var("TABLESCOUT_LANGUAGE_FILE") {
            config.storage.language_file = Some(PathBuf::from(path));
        }
        if let Ok(language) = env::var("TABLESCOUT_LANGUAGE") {
            config.language = language;
        }
        if let Ok(level) = env::var("TABLESCOUT_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(json) = env::var("TABLESCOUT_LOG_JSON") {
            config.logging.json_format = json
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("invalid log JSON flag: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileRead(e.to_string()))?;
        let config: Self =
            toml::from_str(&data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "language must not be empty".to_string(),
            ));
        }
        if self.storage.users_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "users file name must not be empty".to_string(),
            ));
        }
        if self.logging.level.parse::<LogLevel>().is_err() {
            return Err(ConfigError::InvalidValue(format!(
                "unrecognized log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Full path of the credential file.
    pub fn users_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.users_file)
    }
}
