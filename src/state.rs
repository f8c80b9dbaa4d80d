use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::retrieval::{HttpKnowledgeBaseClient, KnowledgeBaseClient};

/// Application state shared across request handlers.
///
/// Everything here is immutable after startup: the config is read-only and
/// the collaborator client is stateless across calls, so concurrent tool
/// invocations have nothing to coordinate.
pub struct AppState {
    pub config: Arc<Config>,
    pub kb_client: Arc<dyn KnowledgeBaseClient>,
}

impl AppState {
    /// Build state with the HTTP-backed collaborator client.
    pub fn new(config: Config) -> Result<Self> {
        let kb_client = HttpKnowledgeBaseClient::new(
            config.retrieval_endpoint.clone(),
            config.request_timeout_secs,
        )?;

        Ok(Self {
            config: Arc::new(config),
            kb_client: Arc::new(kb_client),
        })
    }

    /// Build state with an injected collaborator client. Used by tests.
    pub fn with_client(config: Config, kb_client: Arc<dyn KnowledgeBaseClient>) -> Self {
        Self {
            config: Arc::new(config),
            kb_client,
        }
    }
}
