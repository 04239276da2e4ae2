//! Internationalization module
//!
//! This module fetches translation bundles over HTTP, caches them per
//! language, and resolves dotted keys with `{name}` placeholder formatting.

pub mod cache;
pub mod loader;
pub mod manager;
pub mod resolver;

// Re-export commonly used i18n components
pub use cache::{Bundle, TranslationCache, TranslationStats, LanguageStats};
pub use loader::TranslationLoader;
pub use manager::TranslationManager;
pub use resolver::{translate, TranslationParams};
