//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from configuration files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `TRANSCACHE__LOADER__BASE_PATH`
pub const ENV_PREFIX: &str = "TRANSCACHE";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Settings {
    pub loader: LoaderConfig,
    pub logging: LoggingConfig,
}

/// Translation loader configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoaderConfig {
    /// Scheme and host the resource path is resolved against
    pub origin: String,
    /// Path prefix of the translation files, `/translations` by default
    pub base_path: String,
    /// Request timeout; unset means a request may wait forever
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from an optional `config` file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::builder(config::File::with_name("config").required(false))?
            .build()?
            .try_deserialize()
    }

    /// Load settings from an explicit file, still honouring environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::builder(config::File::from(path.as_ref()).required(true))?
            .build()?
            .try_deserialize()
    }

    fn builder(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = Self::default();

        let builder = config::Config::builder()
            .set_default("loader.origin", defaults.loader.origin)?
            .set_default("loader.base_path", defaults.loader.base_path)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        Ok(builder)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TranscacheError> {
        super::validation::validate_settings(self)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8080".to_string(),
            base_path: "/translations".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
