//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and order operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Eco-score outside 0..=100.
    #[error("Eco-score {0} is outside 0..=100")]
    EcoScoreOutOfRange(i64),

    /// Price that cannot be represented (negative, NaN, infinite).
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Two catalog entries share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
