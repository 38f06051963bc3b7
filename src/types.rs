//! Shared types used across the artifex runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Loosely-typed argument mapping carried by tool calls.
///
/// With serde_json's `preserve_order` feature this keeps insertion order,
/// so arguments render in the order the model supplied them.
pub type ArgMap = serde_json::Map<String, Value>;

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

/// A chat message in the multi-turn conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Wire name used by OpenAI-compatible chat APIs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

// ---------------------------------------------------------------------------
// Tool calls
// ---------------------------------------------------------------------------

/// A tool call request parsed out of model text.
///
/// Transient — lives only within one loop iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    pub arguments: ArgMap,
}

/// Result of executing one tool call request.
///
/// `result` holds the tool's return value on success, or the error text
/// as a string value — the model sees both through the same channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub tool: String,
    pub arguments: ArgMap,
    pub result: Value,
}
