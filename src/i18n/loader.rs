//! Translation bundle loader
//!
//! This module fetches translation bundles over HTTP from
//! `{origin}{base_path}/{language}.json` and memoizes them per language.
//!
//! Only successful loads are cached. A failed fetch leaves no trace in the
//! cache, so the next call for the same language goes back to the network.
//! Two concurrent loads of the same uncached language both fetch; whichever
//! finishes last owns the cache entry.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::LoaderConfig;
use crate::utils::errors::{LoadError, LoadResult, Result, TranscacheError};
use crate::utils::logging;
use super::cache::{count_keys, Bundle, TranslationCache};

/// Byte order mark some editors write at the start of UTF-8 files
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Fetches and caches translation bundles by language code
#[derive(Debug)]
pub struct TranslationLoader {
    client: Client,
    base_url: String,
    cache: TranslationCache,
}

impl TranslationLoader {
    /// Create a new loader from configuration
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build().map_err(TranscacheError::Http)?;

        Ok(Self::with_client(client, config))
    }

    /// Create a loader around an existing HTTP client
    pub fn with_client(client: Client, config: &LoaderConfig) -> Self {
        let base_url = format!(
            "{}{}",
            config.origin.trim_end_matches('/'),
            config.base_path.trim_end_matches('/')
        );

        Self {
            client,
            base_url,
            cache: TranslationCache::new(),
        }
    }

    /// URL of the bundle for a language
    ///
    /// The language code is inserted as given, without validation.
    pub fn resource_url(&self, language: &str) -> String {
        format!("{}/{}.json", self.base_url, language)
    }

    /// Load a bundle, reporting why it could not be loaded
    pub async fn try_load(&self, language: &str) -> LoadResult<Arc<Bundle>> {
        if let Some(bundle) = self.cache.get(language).await {
            logging::log_cache_hit(language);
            return Ok(bundle);
        }

        let bundle = Arc::new(self.fetch(language).await?);
        self.cache.insert(language, Arc::clone(&bundle)).await;
        logging::log_bundle_loaded(language, count_keys(&bundle));

        Ok(bundle)
    }

    /// Load a bundle, logging any failure and returning `None` in its place
    pub async fn load(&self, language: &str) -> Option<Arc<Bundle>> {
        match self.try_load(language).await {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                logging::log_load_failure(language, &self.resource_url(language), &e);
                None
            }
        }
    }

    /// Cache of successfully loaded bundles
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Issue the GET request and parse the body
    async fn fetch(&self, language: &str) -> LoadResult<Bundle> {
        let url = self.resource_url(language);

        debug!(language = language, url = %url, "Fetching translations");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(&body[..]);
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(map) => Ok(map),
            other => Err(LoadError::Parse(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
