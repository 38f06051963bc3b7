//! Configuration schema for artifex.toml.

use crate::agent::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// OpenAI-compatible API base URL.
    pub api_base_url: String,

    /// API key. Empty means "read OPENAI_API_KEY from the environment".
    pub api_key: String,

    /// Chat model for the agent loop.
    pub model: String,

    /// Maximum tokens per completion.
    pub max_tokens: u32,

    /// Maximum loop iterations per run.
    pub max_iterations: u32,

    /// System prompt override. Empty means the built-in prompt.
    pub system_prompt: String,

    /// Log level (debug, info, warn, error).
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.openai.com".into(),
            api_key: String::new(),
            model: "gpt-4o".into(),
            max_tokens: 1024,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            system_prompt: String::new(),
            log_level: "info".into(),
        }
    }
}

impl AgentConfig {
    /// API key from config, falling back to the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        if !self.api_key.is_empty() {
            return Some(self.api_key.clone());
        }
        std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())
    }

    /// System prompt from config, falling back to the built-in one.
    pub fn effective_system_prompt(&self) -> &str {
        if self.system_prompt.is_empty() {
            crate::agent::prompt::DEFAULT_SYSTEM_PROMPT
        } else {
            &self.system_prompt
        }
    }
}
