//! Request and response envelopes exchanged with the hosting agent runtime.
//!
//! Required versus optional fields are structural: a `ToolUse` without a
//! `text` query fails deserialization before it ever reaches the handler,
//! which is exactly the caller-error contract.

use serde::{Deserialize, Serialize};

/// A single tool invocation from the agent runtime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolUse {
    pub tool_use_id: String,
    /// Registered tool name, e.g. `retrieve_pet_care`.
    pub name: String,
    pub input: ToolInput,
}

/// Parameters of a retrieval tool invocation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInput {
    /// The query to retrieve relevant knowledge. Required.
    pub text: String,

    /// Maximum number of results to request from the knowledge base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_results: Option<u32>,

    /// Region selector; falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Minimum relevance score threshold in [0.0, 1.0].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

/// Result envelope returned for every invocation, success or error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub tool_use_id: String,
    pub status: ToolStatus,
    pub content: Vec<ContentBlock>,
}

impl ToolResult {
    pub fn success(tool_use_id: String, text: String) -> Self {
        Self {
            tool_use_id,
            status: ToolStatus::Success,
            content: vec![ContentBlock { text }],
        }
    }

    pub fn error(tool_use_id: String, text: String) -> Self {
        Self {
            tool_use_id,
            status: ToolStatus::Error,
            content: vec![ContentBlock { text }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_use_requires_text() {
        let missing_text = json!({
            "toolUseId": "tu-1",
            "name": "retrieve_pet_care",
            "input": { "numberOfResults": 5 }
        });

        assert!(serde_json::from_value::<ToolUse>(missing_text).is_err());
    }

    #[test]
    fn test_tool_use_optional_fields_default_to_none() {
        let minimal = json!({
            "toolUseId": "tu-2",
            "name": "retrieve_pet_care",
            "input": { "text": "safe foods for cats" }
        });

        let invocation: ToolUse = serde_json::from_value(minimal).unwrap();

        assert!(invocation.input.number_of_results.is_none());
        assert!(invocation.input.region.is_none());
        assert!(invocation.input.score.is_none());
    }

    #[test]
    fn test_tool_result_wire_shape() {
        let result = ToolResult::success("tu-3".to_string(), "hello".to_string());

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["toolUseId"], "tu-3");
        assert_eq!(value["status"], "success");
        assert_eq!(value["content"][0]["text"], "hello");
    }

    #[test]
    fn test_error_status_serializes_lowercase() {
        let result = ToolResult::error("tu-4".to_string(), "boom".to_string());

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["status"], "error");
    }
}
