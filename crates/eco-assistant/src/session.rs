//! Chat sessions.
//!
//! A [`ChatSession`] keeps the conversation in request order. A
//! [`SharedChat`] lets several tasks talk to one session while allowing at
//! most one request in flight.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::assistant::Assistant;
use crate::error::ChatError;

/// Greeting every session starts with.
pub const GREETING: &str = "Hi! I'm EcoGuide, your sustainable shopping assistant. Ask me anything about eco-friendly products, finding shops, your orders, or return policies!";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One entry of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A single user's conversation with the assistant.
#[derive(Debug)]
pub struct ChatSession {
    assistant: Assistant,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            history: vec![ChatMessage::assistant(GREETING)],
        }
    }

    /// Send a message and return the reply.
    ///
    /// Blank messages are refused without touching the history. When the
    /// reply cannot be produced the user message stays in the history and
    /// nothing else is appended.
    pub async fn send(&mut self, text: &str) -> Result<String, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.history.push(ChatMessage::user(text));

        match self.assistant.respond(text).await {
            Ok(reply) => {
                debug!(history = self.history.len() + 1, "Appending reply");
                self.history.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                warn!(error = %err, "Failed to produce reply");
                Err(ChatError::Unavailable(err))
            }
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Drop the conversation, keeping only the greeting.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(ChatMessage::assistant(GREETING));
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut Assistant {
        &mut self.assistant
    }
}

/// A session shared between tasks.
#[derive(Debug, Clone)]
pub struct SharedChat {
    inner: Arc<Mutex<ChatSession>>,
}

impl SharedChat {
    pub fn new(session: ChatSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Send a message, failing with [`ChatError::Busy`] while another
    /// message of this session is still being answered.
    pub async fn send(&self, text: &str) -> Result<String, ChatError> {
        let mut session = self.inner.try_lock().map_err(|_| ChatError::Busy)?;
        session.send(text).await
    }

    /// Snapshot of the history. Waits for an in-flight request to finish.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.inner.lock().await.history().to_vec()
    }

    pub async fn reset(&self) {
        self.inner.lock().await.reset();
    }
}
