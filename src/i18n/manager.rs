//! Translation manager
//!
//! A single entry point that owns the loader (and through it the cache) and
//! exposes loading and translation side by side.

use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::utils::errors::{LoadResult, Result};
use super::cache::{Bundle, TranslationStats};
use super::loader::TranslationLoader;
use super::resolver::{self, TranslationParams};

/// Main internationalization manager
#[derive(Debug)]
pub struct TranslationManager {
    loader: TranslationLoader,
}

impl TranslationManager {
    /// Create a new manager from loader configuration
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        Ok(Self {
            loader: TranslationLoader::new(config)?,
        })
    }

    /// Create a manager around an already built loader
    pub fn from_loader(loader: TranslationLoader) -> Self {
        Self { loader }
    }

    /// Load the bundle for a language; failures are logged and yield `None`
    pub async fn load_translation(&self, language: &str) -> Option<Arc<Bundle>> {
        self.loader.load(language).await
    }

    /// Load the bundle for a language, surfacing the failure
    pub async fn try_load_translation(&self, language: &str) -> LoadResult<Arc<Bundle>> {
        self.loader.try_load(language).await
    }

    /// Get a translated message
    pub fn translate(
        &self,
        translations: Option<&Bundle>,
        key: &str,
        params: Option<&TranslationParams>,
    ) -> String {
        match params {
            Some(params) => resolver::translate(translations, key, params),
            None => resolver::translate(translations, key, &TranslationParams::new()),
        }
    }

    /// Get translation statistics for loaded languages
    pub async fn stats(&self) -> TranslationStats {
        self.loader.cache().stats().await
    }

    pub fn loader(&self) -> &TranslationLoader {
        &self.loader
    }
}
