//! Tool invocation handler: parameter resolution, collaborator call,
//! score filtering, display rendering, and the success/error envelope.

use crate::error::{AppError, Result};
use crate::retrieval::{filter_by_score, format_for_display};
use crate::state::AppState;
use crate::tool::registry::KnowledgeBaseTool;
use crate::tool::types::{ToolResult, ToolUse};

/// Handle one tool invocation.
///
/// # Flow
/// 1. Dispatch on tool name, validate the query
/// 2. Resolve count, region, and threshold from input or configured defaults
/// 3. Query the knowledge base collaborator
/// 4. Filter by score, render, wrap into a result envelope
///
/// # Errors
/// Only caller input errors (unknown tool, empty query, zero result count)
/// propagate as `Err`. Collaborator faults never escape: they are logged
/// and converted into an error-status `ToolResult`, so the hosting runtime
/// always receives a well-formed envelope.
pub async fn handle(state: &AppState, invocation: ToolUse) -> Result<ToolResult> {
    let start = std::time::Instant::now();
    let request_id = uuid::Uuid::new_v4();

    tracing::info!(
        %request_id,
        tool_use_id = %invocation.tool_use_id,
        tool = %invocation.name,
        input = ?invocation.input,
        "Tool invocation received"
    );

    let tool = KnowledgeBaseTool::from_name(&invocation.name).ok_or_else(|| {
        AppError::ValidationError(format!("Unknown tool: {}", invocation.name))
    })?;

    let query = invocation.input.text.trim();
    if query.is_empty() {
        return Err(AppError::ValidationError(
            "Query text cannot be empty".to_string(),
        ));
    }

    let config = &state.config;
    let number_of_results = invocation
        .input
        .number_of_results
        .unwrap_or(config.default_result_count);
    if number_of_results == 0 {
        return Err(AppError::ValidationError(
            "numberOfResults must be at least 1".to_string(),
        ));
    }

    let region = invocation
        .input
        .region
        .as_deref()
        .unwrap_or(&config.default_region);

    // Out-of-range thresholds are clamped rather than rejected.
    let min_score = invocation
        .input
        .score
        .unwrap_or(config.default_min_score)
        .clamp(0.0, 1.0);

    let knowledge_base_id = tool.knowledge_base_id(config);

    let result = match state
        .kb_client
        .retrieve(query, knowledge_base_id, number_of_results, region)
        .await
    {
        Ok(records) => {
            let filtered = filter_by_score(records, min_score);
            let block = format_for_display(&filtered);

            ToolResult::success(
                invocation.tool_use_id,
                format!(
                    "Retrieved {} {} results with score >= {}:\n{}",
                    filtered.len(),
                    tool.topic(),
                    min_score,
                    block
                ),
            )
        }
        Err(e) => {
            tracing::error!(
                tool = tool.name(),
                error = %e,
                "Knowledge base retrieval failed"
            );
            metrics::counter!("tool_errors_total").increment(1);

            ToolResult::error(
                invocation.tool_use_id,
                format!("Error retrieving {} information: {}", tool.topic(), e),
            )
        }
    };

    tracing::info!(
        %request_id,
        tool = tool.name(),
        result = ?result,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Tool invocation completed"
    );

    metrics::counter!("tool_invocations_total").increment(1);
    metrics::histogram!("tool_invocation_latency_ms").record(start.elapsed().as_millis() as f64);

    Ok(result)
}
