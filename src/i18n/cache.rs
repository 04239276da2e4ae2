//! Per-language translation cache
//!
//! Bundles are stored behind `Arc` so callers can hold on to a loaded
//! dictionary without copying it or keeping the cache locked. Entries are
//! only ever added: there is no eviction and no invalidation.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Parsed translation dictionary for one language
pub type Bundle = Map<String, Value>;

/// Cache of loaded bundles keyed by language code
#[derive(Debug, Default)]
pub struct TranslationCache {
    bundles: RwLock<HashMap<String, Arc<Bundle>>>,
}

impl TranslationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bundle cached for a language
    pub async fn get(&self, language: &str) -> Option<Arc<Bundle>> {
        self.bundles.read().await.get(language).cloned()
    }

    /// Store a bundle, replacing any bundle already cached for the language
    pub async fn insert(&self, language: &str, bundle: Arc<Bundle>) {
        self.bundles.write().await.insert(language.to_string(), bundle);
    }

    /// Check if a language has a cached bundle
    pub async fn contains(&self, language: &str) -> bool {
        self.bundles.read().await.contains_key(language)
    }

    /// Cached language codes, sorted
    pub async fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.bundles.read().await.keys().cloned().collect();
        languages.sort();
        languages
    }

    pub async fn len(&self) -> usize {
        self.bundles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bundles.read().await.is_empty()
    }

    /// Get translation statistics for every cached language
    pub async fn stats(&self) -> TranslationStats {
        let bundles = self.bundles.read().await;

        let mut languages: Vec<LanguageStats> = bundles
            .iter()
            .map(|(code, bundle)| LanguageStats {
                code: code.clone(),
                key_count: count_keys(bundle),
            })
            .collect();
        languages.sort_by(|a, b| a.code.cmp(&b.code));

        let total_keys = languages.iter().map(|lang| lang.key_count).sum();

        TranslationStats {
            languages,
            total_keys,
        }
    }
}

/// Recursively count leaf values of a bundle
pub fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}
