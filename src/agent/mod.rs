//! Core tool-calling agent loop.
//!
//! Each `run` call drives: build prompt → call model → extract tool calls
//! → dispatch → feed results back → repeat, until the model answers in
//! plain text or the iteration cap is hit.

pub mod prompt;

use crate::extract;
use crate::llm::LlmClient;
use crate::tools::{coerce_arguments, Tool, ToolError, ToolRegistry};
use crate::types::{ArgMap, ChatMessage, ToolCallRequest, ToolCallResult};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Default bound on loop iterations per `run` call.
pub const DEFAULT_MAX_ITERATIONS: u32 = 5;

/// An agent instance: a model, a system prompt, a tool registry, and the
/// conversation history it exclusively owns.
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    model: String,
    system_prompt: String,
    tools: ToolRegistry,
    history: Vec<ChatMessage>,
    max_iterations: u32,
}

impl Agent {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        tools: Vec<Box<dyn Tool>>,
    ) -> Self {
        let registry = ToolRegistry::new(tools);
        info!("Agent initialized with {} tool(s)", registry.len());
        Self {
            llm,
            model: model.into(),
            system_prompt: system_prompt.into(),
            tools: registry,
            history: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the iteration cap (must be at least 1).
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Clear the conversation history. Tools and the cap are untouched.
    pub fn reset(&mut self) {
        info!("Conversation history reset");
        self.history.clear();
    }

    /// Run the loop for one user input and return the final response.
    ///
    /// Never fails on tool-side problems — unresolved names, execution
    /// failures and malformed call markup all flow back to the model as
    /// text. The only error path is the model invocation itself.
    pub async fn run(&mut self, user_input: &str) -> Result<String> {
        info!("Starting agent run");
        self.history.push(ChatMessage::user(user_input));

        let system_content = prompt::build_system_content(&self.system_prompt, &self.tools);
        let mut results_turn: Option<String> = None;
        let mut iterations: u32 = 0;

        let final_response = loop {
            iterations += 1;
            debug!("Iteration {}/{}", iterations, self.max_iterations);

            let mut messages = Vec::with_capacity(self.history.len() + 2);
            messages.push(ChatMessage::system(system_content.clone()));
            messages.extend(self.history.iter().cloned());
            if let Some(summary) = &results_turn {
                messages.push(ChatMessage::user(summary.clone()));
            }

            let response = self.llm.complete(&self.model, &messages).await?;
            debug!("Model response: {} chars", response.len());

            let requests = extract::extract_tool_calls(&response);
            if requests.is_empty() {
                break response;
            }
            if iterations >= self.max_iterations {
                warn!(
                    "Iteration cap reached — discarding {} unexecuted tool call(s)",
                    requests.len()
                );
                break response;
            }

            let results = self.execute_requests(requests).await;
            results_turn = Some(prompt::format_tool_results(&results));
        };

        self.history.push(ChatMessage::assistant(final_response.clone()));
        info!("Agent run completed");
        Ok(final_response)
    }

    /// Execute extracted requests strictly one after another, in order.
    async fn execute_requests(&self, requests: Vec<ToolCallRequest>) -> Vec<ToolCallResult> {
        let total = requests.len();
        let mut results = Vec::with_capacity(total);

        for (i, request) in requests.into_iter().enumerate() {
            info!("Executing tool call {}/{}: {}", i + 1, total, request.name);
            let ToolCallRequest { name, mut arguments } = request;

            let result = match self.dispatch(&name, &mut arguments).await {
                Ok(value) => value,
                Err(e) => {
                    warn!("{}", e);
                    Value::String(e.to_string())
                }
            };

            results.push(ToolCallResult {
                tool: name,
                arguments,
                result,
            });
        }

        results
    }

    /// Resolve, coerce, execute. Arguments are coerced in place so the
    /// result record reflects the values the tool actually saw.
    async fn dispatch(&self, name: &str, arguments: &mut ArgMap) -> Result<Value, ToolError> {
        let Some(tool) = self.tools.get(name) else {
            return Err(ToolError::NotFound(name.to_string()));
        };

        coerce_arguments(arguments, tool.descriptor());

        tool.execute(arguments.clone())
            .await
            .map_err(|e| ToolError::Execution {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}
