//! JSON-over-HTTP client with timeout and retry.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{redact_url, truncate_body, MAX_ERROR_BODY};
use crate::retry::RetryPolicy;
use crate::FetchError;

/// Default total timeout for a single attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// HTTP client for outbound JSON requests.
///
/// Every request gets the client's timeout per attempt and is retried
/// according to its [`RetryPolicy`].
#[derive(Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    default_headers: HashMap<String, String>,
    retry: RetryPolicy,
}

impl FetchClient {
    /// Create a client with the given per-attempt timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;
        Ok(Self {
            http,
            default_headers: HashMap::new(),
            retry: RetryPolicy::default(),
        })
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// GET a URL and parse the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.with_retries(url, || self.http.get(url)).await
    }

    /// POST a JSON body and parse the response as JSON.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        self.with_retries(url, || {
            self.http
                .post(url)
                .header("Content-Type", "application/json")
                .body(payload.clone())
        })
        .await
    }

    async fn with_retries<T, F>(&self, url: &str, build: F) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::RequestBuilder,
    {
        let shown = redact_url(url);
        let mut attempt = 0;
        loop {
            let mut request = build();
            for (key, value) in &self.default_headers {
                request = request.header(key, value);
            }

            match send_once(shown, request).await {
                Ok(value) => return Ok(value),
                Err(err) if self.retry.should_retry(&err, attempt) => {
                    let delay = self.retry.backoff.delay_for_attempt(attempt);
                    warn!(url = shown, attempt, error = %err, ?delay, "Retrying request");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header values may hold credentials
        let mut headers: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        headers.sort_unstable();
        f.debug_struct("FetchClient")
            .field("default_headers", &headers)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

async fn send_once<T: DeserializeOwned>(
    url: &str,
    request: reqwest::RequestBuilder,
) -> Result<T, FetchError> {
    let response = request.send().await?;
    let status = response.status();
    debug!(url, status = status.as_u16(), "Received response");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::HttpError {
            status: status.as_u16(),
            url: url.to_string(),
            body: truncate_body(&body, MAX_ERROR_BODY),
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(FetchError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_header_values() {
        let client = FetchClient::new(DEFAULT_TIMEOUT)
            .unwrap()
            .with_default_header("x-api-key", "s3cret")
            .with_retry(RetryPolicy::none());

        let debug = format!("{:?}", client);
        assert!(debug.contains("x-api-key"));
        assert!(!debug.contains("s3cret"));
    }
}
