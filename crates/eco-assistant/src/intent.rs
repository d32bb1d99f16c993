//! Intent classification for chat messages.
//!
//! Rules are checked in priority order; the first that matches wins:
//!
//! 1. an order-tracking phrase → [`Intent::OrderStatus`]
//! 2. "return" or "refund" anywhere → [`Intent::ReturnPolicy`]
//! 3. a whole-word action verb together with a shopping term →
//!    [`Intent::ProductSearch`]
//! 4. anything else → [`Intent::General`]

use serde::{Deserialize, Serialize};

const ORDER_PHRASES: &[&str] = &["order status", "where's my order", "track order"];

const RETURN_TERMS: &[&str] = &["return", "refund"];

/// Matched as whole words.
const ACTION_WORDS: &[&str] = &["find", "show", "search", "buy", "get", "list"];

/// Matched anywhere in the text.
const SHOPPING_TERMS: &[&str] = &[
    "eco",
    "green",
    "organic",
    "bamboo",
    "recycled",
    "shoes",
    "t-shirt",
    "bottle",
    "bag",
    "coffee",
    "toothbrush",
    "product",
    "item",
    "shop",
    "store",
];

/// The purpose of a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    OrderStatus,
    ReturnPolicy,
    /// Carries the lower-cased message.
    ProductSearch { query: String },
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::OrderStatus => "order_status",
            Intent::ReturnPolicy => "return_policy",
            Intent::ProductSearch { .. } => "product_search",
            Intent::General => "general",
        }
    }

    /// Whether answering needs the text-generation backend.
    pub fn is_delegated(&self) -> bool {
        matches!(self, Intent::General)
    }
}

/// Classify a message. Total and pure.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase().replace('\u{2019}', "'");

    if ORDER_PHRASES.iter().any(|p| lower.contains(p)) {
        return Intent::OrderStatus;
    }

    if RETURN_TERMS.iter().any(|t| lower.contains(t)) {
        return Intent::ReturnPolicy;
    }

    if has_action_word(&lower) && SHOPPING_TERMS.iter().any(|t| lower.contains(t)) {
        return Intent::ProductSearch { query: lower };
    }

    Intent::General
}

fn has_action_word(text: &str) -> bool {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|word| ACTION_WORDS.contains(&word))
}
