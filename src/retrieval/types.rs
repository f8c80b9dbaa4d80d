//! Record types returned by the knowledge-base retrieval collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel used when a record carries no document identifier.
pub const UNKNOWN_DOCUMENT_ID: &str = "Unknown";

/// One scored result from the retrieval service.
///
/// Records are externally produced and consumed once per invocation; the
/// service never mutates or persists them. Every field is defensive: the
/// collaborator does not guarantee a score, an identifier, or a textual
/// payload on every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalRecord {
    /// Relevance score, semantically in [0.0, 1.0]. Not enforced upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Identifier of the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Content payload. Kept as raw JSON: the collaborator occasionally
    /// returns non-string content, which is omitted from display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl RetrievalRecord {
    /// Effective score for filtering; a missing score counts as 0.0.
    pub fn effective_score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    /// Document identifier for display, falling back to the sentinel.
    pub fn display_document_id(&self) -> &str {
        self.document_id.as_deref().unwrap_or(UNKNOWN_DOCUMENT_ID)
    }

    /// Textual content, if the payload is present and actually a string.
    pub fn content_text(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }
}
