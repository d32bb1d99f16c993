//! Normalized search text.

use serde::{Deserialize, Serialize};

/// A lower-cased search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Create a query from user text, lower-casing it.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().to_lowercase(),
        }
    }

    /// The full lower-cased text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-delimited words of the query. Never yields empty words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Check if the query has no words.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
