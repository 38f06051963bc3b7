//! Prompt assembly: system content, tool listing, result summaries.

use crate::tools::ToolRegistry;
use crate::types::ToolCallResult;
use serde_json::Value;
use tracing::debug;

/// Built-in system prompt teaching the model the tool-call contract.
/// Used when the configuration supplies none.
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"You are an AI assistant with function calling capabilities. Your primary role is to interpret user requests and call appropriate functions when needed.

When presented with function definitions within <tools></tools> XML tags, you should:

1. Analyze the user's request to determine if a function call is necessary
2. Carefully inspect the function signature, paying close attention to parameter types and requirements
3. When calling a function, format your response exactly like this:

<tool_call>
{"name": "<function-name>", "arguments": {"<parameter>": <value>}}
</tool_call>

You may emit several <tool_call> blocks in one response. After you receive the tool results, answer the user in plain text without any <tool_call> markup."#;

/// Serialize all registered descriptors into the `<tools>` listing.
pub fn format_tools(tools: &ToolRegistry) -> String {
    let specs: Vec<Value> = tools.iter().map(|t| t.descriptor().to_value()).collect();
    let listing =
        serde_json::to_string_pretty(&Value::Array(specs)).unwrap_or_else(|_| "[]".into());
    debug!("Formatted {} tool(s) for the model prompt", tools.len());
    format!("<tools>\n{}\n</tools>", listing)
}

/// System message content: instructions plus the tool listing.
pub fn build_system_content(system_prompt: &str, tools: &ToolRegistry) -> String {
    format!("{}\n\n{}", system_prompt, format_tools(tools))
}

/// Render executed tool calls into the summary turn fed back to the model.
///
/// Arrays and objects render as indented JSON when serialization
/// succeeds; strings (including error texts) render bare; everything else
/// uses its default JSON text form.
pub fn format_tool_results(results: &[ToolCallResult]) -> String {
    let mut text = String::from("Tool results:\n");
    for res in results {
        let rendered = match &res.result {
            Value::Array(_) | Value::Object(_) => serde_json::to_string_pretty(&res.result)
                .unwrap_or_else(|_| res.result.to_string()),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let arguments = Value::Object(res.arguments.clone()).to_string();
        text.push_str(&format!("- {}{}: {}\n", res.tool, arguments, rendered));
    }
    text
}
