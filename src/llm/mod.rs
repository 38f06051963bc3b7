//! Model invocation boundary.
//!
//! The agent loop treats the model as a black box: an ordered message
//! sequence in, one generated text completion out. No retry or rate-limit
//! handling lives at this layer.

pub mod openai;

pub use openai::OpenAiClient;

use crate::types::ChatMessage;
use anyhow::Result;
use async_trait::async_trait;

/// A chat-completion backend.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the message sequence to the named model and return the first
    /// generated choice's text content.
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}
