//! Text-generation capability used for open-ended questions.

use std::time::Duration;

use async_trait::async_trait;
use eco_data::{FetchClient, FetchError, RetryPolicy};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::GenerationError;

/// Default Generative Language API root.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Text in, text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Settings for [`GeminiClient`].
#[derive(Clone)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `generateContent` URL for the configured model. The key travels in
    /// the [`API_KEY_HEADER`] header, never in the URL.
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Gemini `generateContent` backend.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: FetchClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        if config.api_key.trim().is_empty() {
            return Err(GenerationError::NotConfigured);
        }
        let client = FetchClient::new(config.timeout)?
            .with_retry(RetryPolicy::none())
            .with_default_header(API_KEY_HEADER, config.api_key.trim());
        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn ask(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.config.model, prompt_len = prompt.len(), "Requesting generation");
        let body = request_body(prompt);
        let response: Value = match self.client.post_json(&self.config.url(), &body).await {
            Ok(response) => response,
            Err(err) => return Err(backend_error(err)),
        };
        extract_text(&response)
    }
}

/// Prefer the message of an `{"error": {"message": ...}}` body over the bare
/// HTTP status.
fn backend_error(err: FetchError) -> GenerationError {
    err.error_body()
        .and_then(|body| serde_json::from_str::<Value>(body).ok())
        .and_then(|body| extract_text(&body).err())
        .filter(|mapped| matches!(mapped, GenerationError::Backend(_)))
        .unwrap_or(GenerationError::Fetch(err))
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// Text of the first part of the first candidate.
pub fn extract_text(response: &Value) -> Result<String, GenerationError> {
    if let Some(message) = response.pointer("/error/message").and_then(Value::as_str) {
        return Err(GenerationError::Backend(message.to_string()));
    }

    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(GenerationError::EmptyResponse)
}

/// Generator used when no backend is configured. Every request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn ask(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_names_model_without_key() {
        let config = GeminiConfig::new("k3y").with_endpoint("http://localhost:8080/v1beta/");
        assert_eq!(
            config.url(),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert!(!format!("{:?}", config).contains("k3y"));
    }

    #[test]
    fn test_backend_error_prefers_error_message() {
        let quota = FetchError::HttpError {
            status: 429,
            url: "http://api".to_string(),
            body: r#"{"error": {"code": 429, "message": "Quota exceeded"}}"#.to_string(),
        };
        assert!(matches!(
            backend_error(quota),
            GenerationError::Backend(m) if m == "Quota exceeded"
        ));

        let plain = FetchError::HttpError {
            status: 502,
            url: "http://api".to_string(),
            body: "Bad Gateway".to_string(),
        };
        assert!(matches!(
            backend_error(plain),
            GenerationError::Fetch(FetchError::HttpError { status: 502, .. })
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_extract_text() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": " Compost it. " } ], "role": "model" } }
            ]
        });
        assert_eq!(extract_text(&response).unwrap(), "Compost it.");
    }

    #[test]
    fn test_extract_text_failures() {
        assert!(matches!(
            extract_text(&json!({ "candidates": [] })),
            Err(GenerationError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(&json!({ "error": { "code": 429, "message": "Quota exceeded" } })),
            Err(GenerationError::Backend(m)) if m == "Quota exceeded"
        ));
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        assert!(matches!(
            GeminiClient::new(GeminiConfig::new("  ")),
            Err(GenerationError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_offline_generator_always_fails() {
        assert!(matches!(
            OfflineGenerator.ask("hi").await,
            Err(GenerationError::NotConfigured)
        ));
    }
}
