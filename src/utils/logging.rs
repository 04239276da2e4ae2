//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the translation loader.

use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{LoadError, Result, TranscacheError};

/// Initialize logging based on configuration
///
/// When a log directory is configured, the returned guard must be kept alive
/// for as long as file output is wanted; dropping it flushes and stops the
/// background writer.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| TranscacheError::Logging(e.to_string()))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "transcache.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| TranscacheError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a failed bundle load with the language and the cause
pub fn log_load_failure(language: &str, url: &str, err: &LoadError) {
    error!(
        language = language,
        url = url,
        kind = err.kind(),
        error = %err,
        "Failed to load translations for {}", language
    );
}

/// Log a bundle served from the cache
pub fn log_cache_hit(language: &str) {
    debug!(language = language, "Translation cache hit");
}

/// Log a freshly fetched bundle
pub fn log_bundle_loaded(language: &str, key_count: usize) {
    debug!(
        language = language,
        key_count = key_count,
        "Loaded translations"
    );
}
