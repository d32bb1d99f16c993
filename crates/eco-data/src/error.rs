//! HTTP client error types.

use thiserror::Error;

/// Longest error body kept on [`FetchError::HttpError`].
pub const MAX_ERROR_BODY: usize = 512;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to build the client or send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Could not connect to the remote host.
    #[error("Connection error: {0}")]
    Connection(String),

    /// HTTP error response. `url` never carries a query string and `body`
    /// is cut to [`MAX_ERROR_BODY`] bytes.
    #[error("HTTP {status} for {url}")]
    HttpError { status: u16, url: String, body: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Body of an HTTP error response, if there was one.
    pub fn error_body(&self) -> Option<&str> {
        match self {
            FetchError::HttpError { body, .. } if !body.is_empty() => Some(body.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(mut e: reqwest::Error) -> Self {
        if let Some(url) = e.url_mut() {
            url.set_query(None);
        }

        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::HttpError {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
                body: String::new(),
            }
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

/// Drop the query string and fragment of a URL.
pub(crate) fn redact_url(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

/// Cut `body` to at most `max` bytes on a char boundary.
pub(crate) fn truncate_body(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_url_drops_query() {
        assert_eq!(
            redact_url("https://api.example/v1/models/m:generateContent?key=abc"),
            "https://api.example/v1/models/m:generateContent"
        );
        assert_eq!(redact_url("http://catalog/api/products"), "http://catalog/api/products");
        assert_eq!(redact_url("http://catalog/#top"), "http://catalog/");
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        assert_eq!(truncate_body("short", 16), "short");
        assert_eq!(truncate_body("₹₹₹", 4), "₹");
    }

    #[test]
    fn test_error_body() {
        let err = FetchError::HttpError {
            status: 429,
            url: "http://api".to_string(),
            body: r#"{"error":{}}"#.to_string(),
        };
        assert_eq!(err.error_body(), Some(r#"{"error":{}}"#));
        assert_eq!(FetchError::Timeout.error_body(), None);
    }
}
