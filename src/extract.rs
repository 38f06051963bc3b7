//! Tool-call extraction from raw model output.
//!
//! The wire contract: each call is a JSON object
//! `{"name": …, "arguments": {…}}` wrapped literally in
//! `<tool_call>` / `</tool_call>` tags. Multiple tagged regions may
//! appear in one response; content may span lines.

use crate::types::ToolCallRequest;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, info};

fn tool_call_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // (?s) lets the body span multiple lines; the lazy `.*?` keeps
    // regions non-overlapping, matched left to right.
    RE.get_or_init(|| Regex::new(r"(?s)<tool_call>(.*?)</tool_call>").expect("static pattern"))
}

/// Extract all well-formed tool call requests from a model response.
///
/// Malformed regions — invalid JSON, or objects missing `name` or
/// `arguments` — are silently skipped. Never fails: returns an empty
/// vector at worst. Stateless and idempotent.
pub fn extract_tool_calls(response: &str) -> Vec<ToolCallRequest> {
    let mut calls = Vec::new();

    for captures in tool_call_re().captures_iter(response) {
        let body = captures[1].trim();
        match serde_json::from_str::<ToolCallRequest>(body) {
            Ok(call) => calls.push(call),
            Err(e) => debug!("Skipping malformed tool call region: {}", e),
        }
    }

    if calls.is_empty() {
        debug!("No tool calls found in model response");
    } else {
        info!("Extracted {} tool call(s) from model response", calls.len());
    }

    calls
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_a_call_embedded_in_prose() {
        let response = concat!(
            "Let me compute that for you.\n",
            "<tool_call>{\"name\":\"f\",\"arguments\":{\"a\":1}}</tool_call>\n",
            "I'll report back once I have the result.",
        );
        let calls = extract_tool_calls(response);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "f");
        assert_eq!(calls[0].arguments.get("a"), Some(&json!(1)));
    }

    #[test]
    fn handles_multi_line_json_bodies() {
        let response = "<tool_call>\n{\n  \"name\": \"add_two_numbers\",\n  \"arguments\": {\n    \"a\": 1,\n    \"b\": 2\n  }\n}\n</tool_call>";
        let calls = extract_tool_calls(response);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "add_two_numbers");
    }

    #[test]
    fn preserves_document_order_across_regions() {
        let response = "<tool_call>{\"name\":\"first\",\"arguments\":{}}</tool_call> and \
                        <tool_call>{\"name\":\"second\",\"arguments\":{}}</tool_call>";
        let names: Vec<String> = extract_tool_calls(response)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn plain_text_yields_no_calls() {
        assert!(extract_tool_calls("The sum is 3.").is_empty());
    }

    #[test]
    fn invalid_json_regions_are_skipped() {
        let response = "<tool_call>{not json}</tool_call> \
                        <tool_call>{\"name\":\"ok\",\"arguments\":{}}</tool_call>";
        let calls = extract_tool_calls(response);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "ok");
    }

    #[test]
    fn regions_missing_required_keys_are_skipped() {
        let missing_arguments = "<tool_call>{\"name\":\"f\"}</tool_call>";
        assert!(extract_tool_calls(missing_arguments).is_empty());

        let missing_name = "<tool_call>{\"arguments\":{}}</tool_call>";
        assert!(extract_tool_calls(missing_name).is_empty());
    }

    #[test]
    fn unterminated_region_is_ignored() {
        let response = "<tool_call>{\"name\":\"f\",\"arguments\":{}}";
        assert!(extract_tool_calls(response).is_empty());
    }

    #[test]
    fn tags_are_case_sensitive() {
        let response = "<TOOL_CALL>{\"name\":\"f\",\"arguments\":{}}</TOOL_CALL>";
        assert!(extract_tool_calls(response).is_empty());
    }
}
