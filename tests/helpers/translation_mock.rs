//! Mock translation file server for testing
//!
//! This module provides a mock HTTP server that serves translation bundles
//! the way a static file host would. It uses wiremock to create configurable
//! responses per language.

use std::time::Duration;

use serde_json::{json, Value};
use transcache::config::LoaderConfig;
use transcache::TranslationLoader;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Base path used by every mock, matching the loader default
pub const BASE_PATH: &str = "/translations";

/// Mock translation server for testing
pub struct TranslationMockServer {
    pub server: MockServer,
}

impl TranslationMockServer {
    /// Create a new mock translation server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Loader configuration pointing at this server
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            origin: self.server.uri(),
            base_path: BASE_PATH.to_string(),
            timeout_seconds: None,
        }
    }

    /// Loader pointing at this server
    pub fn loader(&self) -> TranslationLoader {
        TranslationLoader::new(&self.loader_config()).expect("Failed to build loader")
    }

    /// Serve a bundle for a language, expecting exactly `times` requests
    pub async fn mock_bundle(&self, language: &str, bundle: Value, times: u64) {
        self.mock_response(language, ResponseTemplate::new(200).set_body_json(bundle), times)
            .await;
    }

    /// Serve a bundle after a delay
    pub async fn mock_slow_bundle(&self, language: &str, bundle: Value, delay_ms: u64, times: u64) {
        let response = ResponseTemplate::new(200)
            .set_body_json(bundle)
            .set_delay(Duration::from_millis(delay_ms));
        self.mock_response(language, response, times).await;
    }

    /// Answer with a status code and an empty body
    pub async fn mock_status(&self, language: &str, status: u16, times: u64) {
        self.mock_response(language, ResponseTemplate::new(status), times).await;
    }

    /// Answer 200 with a raw body
    pub async fn mock_raw_body(&self, language: &str, body: &str, times: u64) {
        let response = ResponseTemplate::new(200)
            .set_body_raw(body.to_string(), "application/json");
        self.mock_response(language, response, times).await;
    }

    async fn mock_response(&self, language: &str, response: ResponseTemplate, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}.json", BASE_PATH, language)))
            .respond_with(response)
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Verify how many requests reached a language's bundle
    pub async fn verify_language_fetched(&self, language: &str, times: usize) {
        let expected_path = format!("{}/{}.json", BASE_PATH, language);
        let received_requests = self.server.received_requests().await.unwrap();
        let matching_requests = received_requests
            .iter()
            .filter(|req| req.url.path() == expected_path)
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} fetches of {}, but got {}",
            times, expected_path, matching_requests
        );
    }
}

/// The bundle used throughout the scenarios
pub fn english_bundle() -> Value {
    json!({
        "welcome": "Hello!",
        "greeting": "Hi, {name}!",
        "commands": {
            "start": {
                "welcome": "Welcome to the club, {name}!"
            }
        }
    })
}

/// A second language so caching can be checked per language
pub fn russian_bundle() -> Value {
    json!({
        "welcome": "Привет!",
        "greeting": "Привет, {name}!"
    })
}
