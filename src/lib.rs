//! Transcache
//!
//! Loads locale-keyed translation bundles over HTTP, caches them per
//! language, and resolves dotted keys with placeholder substitution.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TranscacheError, LoadError, Result, LoadResult};

// Re-export main components for easy access
pub use i18n::{Bundle, TranslationLoader, TranslationManager, TranslationParams};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
