//! Assistant error types.

use eco_data::FetchError;
use thiserror::Error;

/// Failure of the text-generation capability.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Text generation is not configured")]
    NotConfigured,

    #[error("Text generation request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Text generation returned no text")]
    EmptyResponse,

    #[error("Text generation failed: {0}")]
    Backend(String),
}

/// Errors returned by a chat session.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("A reply is already in progress")]
    Busy,

    /// The reply could not be produced. The display text is the notice shown
    /// to the user; the cause is kept for logs.
    #[error("Couldn't get a response. Please try again later.")]
    Unavailable(#[source] GenerationError),
}
