pub mod handler;
pub mod registry;
pub mod types;

pub use handler::handle;
pub use registry::KnowledgeBaseTool;
pub use types::{ContentBlock, ToolInput, ToolResult, ToolStatus, ToolUse};
