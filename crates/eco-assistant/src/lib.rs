//! EcoGuide, the storefront's shopping assistant.
//!
//! This crate provides:
//! - `classify` - Rule-based intent classification of chat messages
//! - `handlers` - Fixed replies for order status, returns and product search
//! - `TextGenerator` - Text-generation capability for open-ended questions
//!   (`GeminiClient` over HTTP, `OfflineGenerator` when unconfigured)
//! - `Assistant` - Dispatch from intent to handler
//! - `ChatSession` / `SharedChat` - Ordered history, one request in flight
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use eco_assistant::prelude::*;
//! use eco_commerce::prelude::*;
//!
//! let assistant = Assistant::new(
//!     bundled_catalog(),
//!     Arc::new(InMemoryOrders::empty()),
//!     Arc::new(OfflineGenerator),
//! );
//! let mut session = ChatSession::new(assistant);
//!
//! let reply = session.send("find a bamboo toothbrush").await?;
//! assert_eq!(reply, "Here are some products matching your search:\n• Bamboo Toothbrush (₹99)");
//! ```

mod assistant;
mod error;
mod generator;
pub mod handlers;
mod intent;
mod session;

pub use assistant::{explain_alternative, Assistant};
pub use error::{ChatError, GenerationError};
pub use generator::{
    extract_text, GeminiClient, GeminiConfig, OfflineGenerator, TextGenerator, API_KEY_HEADER, DEFAULT_ENDPOINT,
    DEFAULT_MODEL,
};
pub use intent::{classify, Intent};
pub use session::{ChatMessage, ChatRole, ChatSession, SharedChat, GREETING};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        classify, explain_alternative, Assistant, ChatError, ChatMessage, ChatRole, ChatSession, GenerationError,
        Intent, OfflineGenerator, SharedChat, TextGenerator,
    };
}
