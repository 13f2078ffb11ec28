// src/providers/mod.rs

use async_trait::async_trait;

use crate::errors::Result;

pub mod openai;

/// A single-turn chat completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub user: &'a str,
    pub temperature: f32,
}

/// A common trait for chat-completion LLM providers.
///
/// Object safe so the HTTP layer can hold an `Arc<dyn ChatProvider>` and tests can
/// swap in a fake.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends the request and returns the text of the first completion choice.
    ///
    /// # Returns
    /// A `Result` containing a tuple of the generated `String` and the latency in milliseconds (`u64`).
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<(String, u64)>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
