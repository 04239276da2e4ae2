//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! so a misconfigured origin or log level fails at startup instead of on the
//! first translation request.

use url::Url;

use crate::utils::errors::{Result, TranscacheError};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_loader_config(&settings.loader)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate translation loader configuration
fn validate_loader_config(config: &super::LoaderConfig) -> Result<()> {
    if config.origin.is_empty() {
        return Err(TranscacheError::Config(
            "Loader origin is required".to_string()
        ));
    }

    let origin = Url::parse(&config.origin)?;
    if !matches!(origin.scheme(), "http" | "https") {
        return Err(TranscacheError::Config(
            format!("Unsupported origin scheme: {}", origin.scheme())
        ));
    }

    if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
        return Err(TranscacheError::Config(
            format!("Base path must start with '/': {}", config.base_path)
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(TranscacheError::Config(
            "Loader timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TranscacheError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TranscacheError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
