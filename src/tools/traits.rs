//! Tool trait and adapters.
//!
//! Every registered tool exposes exactly one execution surface:
//! `execute(arguments) -> Result<Value>`. External callable shapes are
//! normalized to this interface at registration time via [`FnTool`].

use crate::tools::descriptor::ToolDescriptor;
use crate::types::ArgMap;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Structured failure produced by the dispatch layer.
///
/// Rendered into a feedback string and fed back to the model as an
/// ordinary tool result — never propagated to `run`'s caller.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Error: Tool '{0}' not found")]
    NotFound(String),

    #[error("Error executing {name}: {message}")]
    Execution { name: String, message: String },
}

/// A named, schema-described unit of external capability.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (used to resolve call requests).
    fn name(&self) -> &str;

    /// The declarative schema shown to the model.
    fn descriptor(&self) -> &ToolDescriptor;

    /// Run the tool with the given arguments bound by name.
    ///
    /// Failures propagate to the caller; the agent loop is responsible
    /// for catching them.
    async fn execute(&self, arguments: ArgMap) -> Result<Value>;
}

/// Stringifying a tool yields its descriptor's serialized form.
impl fmt::Display for dyn Tool + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor())
    }
}

type ToolFn = dyn Fn(ArgMap) -> Result<Value> + Send + Sync;

/// Adapter binding a plain closure to the [`Tool`] interface.
pub struct FnTool {
    descriptor: ToolDescriptor,
    func: Box<ToolFn>,
}

impl FnTool {
    pub fn new<F>(descriptor: ToolDescriptor, func: F) -> Self
    where
        F: Fn(ArgMap) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            descriptor,
            func: Box::new(func),
        }
    }

    /// Convenience: box straight into a registry-ready trait object.
    pub fn boxed<F>(descriptor: ToolDescriptor, func: F) -> Box<dyn Tool>
    where
        F: Fn(ArgMap) -> Result<Value> + Send + Sync + 'static,
    {
        Box::new(Self::new(descriptor, func))
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn execute(&self, arguments: ArgMap) -> Result<Value> {
        (self.func)(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use serde_json::json;

    fn echo_tool() -> Box<dyn Tool> {
        FnTool::boxed(
            ToolDescriptor::new("echo").param("text", "str"),
            |args| Ok(args.get("text").cloned().unwrap_or(Value::Null)),
        )
    }

    #[tokio::test]
    async fn fn_tool_binds_arguments_by_name() {
        let tool = echo_tool();
        let mut args = ArgMap::new();
        args.insert("text".into(), json!("hello"));
        let result = tool.execute(args).await.unwrap();
        assert_eq!(result, json!("hello"));
    }

    #[tokio::test]
    async fn fn_tool_propagates_failures() {
        let tool = FnTool::boxed(ToolDescriptor::new("broken"), |_| bail!("boom"));
        let err = tool.execute(ArgMap::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn display_yields_descriptor_json() {
        let tool = echo_tool();
        let value: Value = serde_json::from_str(&tool.to_string()).unwrap();
        assert_eq!(value, tool.descriptor().to_value());
    }

    #[test]
    fn tool_error_strings_name_the_tool() {
        assert_eq!(
            ToolError::NotFound("frobnicate".into()).to_string(),
            "Error: Tool 'frobnicate' not found"
        );
        let err = ToolError::Execution {
            name: "add_two_numbers".into(),
            message: "Missing 'a' argument".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error executing add_two_numbers: Missing 'a' argument"
        );
    }
}
