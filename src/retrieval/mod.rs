pub mod client;
pub mod processor;
pub mod types;

pub use client::{HttpKnowledgeBaseClient, KnowledgeBaseClient};
pub use processor::{filter_by_score, format_for_display, NO_RESULTS_MESSAGE};
pub use types::RetrievalRecord;
