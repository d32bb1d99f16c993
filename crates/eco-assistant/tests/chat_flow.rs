//! End-to-end chat behaviour with scripted generators.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use eco_assistant::prelude::*;
use eco_commerce::prelude::*;
use tokio::sync::Notify;

/// Replies from a script, failing once it runs out.
struct Scripted {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
}

impl Scripted {
    fn new(replies: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl TextGenerator for Scripted {
    async fn ask(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}

/// Blocks until released, then answers.
struct Gated {
    started: Notify,
    release: Notify,
}

#[async_trait]
impl TextGenerator for Gated {
    async fn ask(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok("done".to_string())
    }
}

fn sample_orders() -> InMemoryOrders {
    let catalog = bundled_catalog();
    let coffee = catalog.get(&ProductId::new("5")).unwrap().clone();
    let brush = catalog.get(&ProductId::new("3")).unwrap().clone();

    InMemoryOrders::new(vec![
        Order::new(
            "ORD-1002",
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            Money::new(109_700, Currency::INR),
        )
        .with_item(coffee, 2)
        .unwrap()
        .with_item(brush, 1)
        .unwrap(),
        Order::new(
            "ORD-1001",
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            Money::new(29_900, Currency::INR),
        ),
    ])
}

fn session_with(generator: Arc<dyn TextGenerator>) -> ChatSession {
    ChatSession::new(Assistant::new(bundled_catalog(), Arc::new(sample_orders()), generator))
}

#[tokio::test]
async fn test_conversation_keeps_request_order() {
    let generator = Arc::new(Scripted::new(vec![Ok("Composting returns nutrients to soil.".to_string())]));
    let mut session = session_with(generator);

    let order = session.send("Where's my order?").await.unwrap();
    let general = session.send("Why compost?").await.unwrap();

    assert_eq!(
        order,
        "Your last order (ORD-1002) for ₹1097 was placed on 2024-06-02. \
         Items: Fair Trade Coffee Beans x2, Bamboo Toothbrush x1."
    );
    assert_eq!(general, "Composting returns nutrients to soil.");

    let roles: Vec<ChatRole> = session.history().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            ChatRole::Assistant,
            ChatRole::User,
            ChatRole::Assistant,
            ChatRole::User,
            ChatRole::Assistant,
        ]
    );
    assert_eq!(session.history()[3].content, "Why compost?");
}

#[tokio::test]
async fn test_generator_failure_keeps_user_message() {
    let generator = Arc::new(Scripted::new(vec![Err(GenerationError::Backend(
        "quota exceeded".to_string(),
    ))]));
    let mut session = session_with(generator);

    let err = session.send("Tell me about hemp").await.unwrap_err();

    assert_eq!(err.to_string(), "Couldn't get a response. Please try again later.");
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1], ChatMessage::user("Tell me about hemp"));

    // The session stays usable
    let reply = session.send("refund?").await.unwrap();
    assert!(reply.starts_with("Our return policy:"));
    assert_eq!(session.history().len(), 4);
}

#[tokio::test]
async fn test_offline_generator_only_affects_general_questions() {
    let mut session = session_with(Arc::new(OfflineGenerator));

    assert!(matches!(
        session.send("hello there").await,
        Err(ChatError::Unavailable(GenerationError::NotConfigured))
    ));
    assert_eq!(
        session.send("find arabica shop items").await.unwrap(),
        "Eco-friendly options:\n• Fair Trade Coffee Beans (₹499)"
    );
}

#[tokio::test]
async fn test_second_request_is_busy_while_first_is_pending() {
    let gated = Arc::new(Gated {
        started: Notify::new(),
        release: Notify::new(),
    });
    let chat = SharedChat::new(session_with(gated.clone()));

    let first = tokio::spawn({
        let chat = chat.clone();
        async move { chat.send("Tell me a fun fact").await }
    });
    gated.started.notified().await;

    assert!(matches!(chat.send("track order").await, Err(ChatError::Busy)));

    gated.release.notify_one();
    assert_eq!(first.await.unwrap().unwrap(), "done");

    let history = chat.history().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[1], ChatMessage::user("Tell me a fun fact"));
    assert_eq!(history[2], ChatMessage::assistant("done"));

    // Free again once the first reply landed
    assert!(chat.send("track order").await.is_ok());
}

#[tokio::test]
async fn test_shared_reset() {
    let chat = SharedChat::new(session_with(Arc::new(OfflineGenerator)));
    chat.send("refund").await.unwrap();
    chat.reset().await;
    assert_eq!(chat.history().await, vec![ChatMessage::assistant(eco_assistant::GREETING)]);
}
