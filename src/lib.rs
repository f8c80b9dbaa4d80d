//! Petlore - knowledge-base retrieval tool service
//!
//! This library exposes the core components of the pet store retrieval
//! tools, enabling integration tests and embedding in other hosts.

pub mod config;
pub mod error;
pub mod handlers;
pub mod retrieval;
pub mod state;
pub mod tool;

// Re-export key types for convenience
pub use config::Config;
pub use error::{AppError, Result};
pub use handlers::{health_handler, invoke_handler, list_tools_handler, ready_handler};
pub use retrieval::{filter_by_score, format_for_display, KnowledgeBaseClient, RetrievalRecord};
pub use state::AppState;
pub use tool::{KnowledgeBaseTool, ToolResult, ToolUse};
