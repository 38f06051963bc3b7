//! Artifex — a tool-calling LLM agent runtime.
//!
//! The model requests function execution through `<tool_call>` regions in
//! its text output; the agent loop extracts those requests, coerces the
//! arguments against each tool's declared schema, dispatches, and feeds
//! the results back until the model answers in plain text.

pub mod agent;
pub mod config;
pub mod extract;
pub mod llm;
pub mod tools;
pub mod types;
