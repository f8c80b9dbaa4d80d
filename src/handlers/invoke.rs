use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;
use crate::tool;
use crate::tool::registry::{KnowledgeBaseTool, ALL_TOOLS};
use crate::tool::types::{ToolResult, ToolUse};

/// POST /tools/invoke - Execute a knowledge-base retrieval tool.
///
/// The body is a `ToolUse` envelope; a missing `text` query is rejected at
/// deserialization. Collaborator faults come back as a 200 with an
/// error-status envelope, never as a transport-level fault.
pub async fn invoke_handler(
    State(state): State<Arc<AppState>>,
    Json(invocation): Json<ToolUse>,
) -> Result<Json<ToolResult>> {
    let result = tool::handle(&state, invocation).await?;
    Ok(Json(result))
}

#[derive(Serialize)]
pub struct ToolDescription {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDescription>,
}

/// GET /tools - List the registered tools for runtime discovery.
pub async fn list_tools_handler() -> Json<ToolListResponse> {
    let tools = ALL_TOOLS
        .iter()
        .map(|tool: &KnowledgeBaseTool| ToolDescription {
            name: tool.name(),
            description: tool.description(),
        })
        .collect();

    Json(ToolListResponse { tools })
}
