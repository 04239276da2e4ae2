//! Error handling for Transcache
//!
//! This module defines the crate-level error type used for setup concerns
//! (configuration, logging, HTTP client construction) and the load error
//! type that describes why a translation bundle could not be fetched.

use thiserror::Error;

/// Main error type for Transcache setup and configuration
#[derive(Error, Debug)]
pub enum TranscacheError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Logging setup error: {0}")]
    Logging(String),
}

/// Why a translation bundle could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("invalid bundle: {0}")]
    Parse(String),
}

/// Result type alias for Transcache operations
pub type Result<T> = std::result::Result<T, TranscacheError>;

/// Result type alias for bundle loading
pub type LoadResult<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// Check if a later attempt could plausibly succeed.
    ///
    /// Nothing in this crate retries; the classification is for callers
    /// deciding how to degrade.
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Network(_) => true,
            LoadError::Status { status } => *status >= 500,
            LoadError::Parse(_) => false,
        }
    }

    /// Short machine-friendly name of the failure kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::Status { .. } => "status",
            LoadError::Parse(_) => "parse",
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
