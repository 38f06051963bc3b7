//! OpenAI-compatible chat completion client.
//!
//! Tool schemas travel inside the system prompt, not the API — the
//! request carries plain `{role, content}` messages only.

use crate::llm::LlmClient;
use crate::types::ChatMessage;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Client for any `/v1/chat/completions`-speaking endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    max_tokens: u32,
    http: reqwest::Client,
}

// -- Wire request/response types ---------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<MessagePayload<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct MessagePayload<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, max_tokens: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            max_tokens,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = ChatRequest {
            model,
            messages: messages
                .iter()
                .map(|m| MessagePayload {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: self.max_tokens,
            temperature: 0.7,
        };

        debug!("Chat completion request to model: {}", model);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Chat completion request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("Chat completion failed ({}): {}", status, body);
        }

        let body: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        let Some(choice) = body.choices.into_iter().next() else {
            bail!("Chat completion response contained no choices");
        };

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    #[test]
    fn request_serializes_roles_and_content() {
        let messages = [
            ChatMessage::system("be helpful"),
            ChatMessage::user("hi"),
        ];
        let request = ChatRequest {
            model: "gpt-4o",
            messages: messages
                .iter()
                .map(|m| MessagePayload {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: 256,
            temperature: 0.7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OpenAiClient::new("https://api.openai.com/", "sk-test", 256);
        assert_eq!(client.base_url, "https://api.openai.com");
    }
}
