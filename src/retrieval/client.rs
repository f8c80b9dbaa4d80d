//! Client for the managed knowledge-base retrieval collaborator.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::retrieval::types::RetrievalRecord;

/// Query-by-text interface onto a knowledge base.
///
/// Implementations must be stateless across calls so concurrent tool
/// invocations never have anything to coordinate.
#[async_trait]
pub trait KnowledgeBaseClient: Send + Sync {
    /// Retrieve up to `number_of_results` scored records for `query` from
    /// the named knowledge base, ordered most relevant first.
    async fn retrieve(
        &self,
        query: &str,
        knowledge_base_id: &str,
        number_of_results: u32,
        region: &str,
    ) -> Result<Vec<RetrievalRecord>>;
}

/// HTTP-backed client for the managed retrieval endpoint.
pub struct HttpKnowledgeBaseClient {
    http: reqwest::Client,
    /// Override for the region-scoped base URL, for local stand-ins.
    endpoint_override: Option<String>,
}

impl HttpKnowledgeBaseClient {
    pub fn new(endpoint_override: Option<String>, request_timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint_override,
        })
    }

    fn base_url(&self, region: &str) -> String {
        match &self.endpoint_override {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-agent-runtime.{}.amazonaws.com", region),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrieveRequest<'a> {
    retrieval_query: RetrievalQuery<'a>,
    retrieval_configuration: RetrievalConfiguration,
}

#[derive(Serialize)]
struct RetrievalQuery<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfiguration {
    vector_search_configuration: VectorSearchConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VectorSearchConfiguration {
    number_of_results: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetrieveResponse {
    #[serde(default)]
    retrieval_results: Vec<WireRecord>,
}

/// Raw collaborator record. The document identifier sits two levels deep
/// in the location object and any of these fields may be absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    location: Option<WireLocation>,
    #[serde(default)]
    content: Option<WireContent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLocation {
    #[serde(default)]
    custom_document_location: Option<WireDocumentLocation>,
}

#[derive(Deserialize)]
struct WireDocumentLocation {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Deserialize)]
struct WireContent {
    #[serde(default)]
    text: Option<Value>,
}

impl From<WireRecord> for RetrievalRecord {
    fn from(wire: WireRecord) -> Self {
        RetrievalRecord {
            score: wire.score,
            document_id: wire
                .location
                .and_then(|l| l.custom_document_location)
                .and_then(|d| d.id),
            content: wire.content.and_then(|c| c.text),
        }
    }
}

#[async_trait]
impl KnowledgeBaseClient for HttpKnowledgeBaseClient {
    async fn retrieve(
        &self,
        query: &str,
        knowledge_base_id: &str,
        number_of_results: u32,
        region: &str,
    ) -> Result<Vec<RetrievalRecord>> {
        let url = format!(
            "{}/knowledgebases/{}/retrieve",
            self.base_url(region),
            knowledge_base_id
        );

        let request = RetrieveRequest {
            retrieval_query: RetrievalQuery { text: query },
            retrieval_configuration: RetrievalConfiguration {
                vector_search_configuration: VectorSearchConfiguration { number_of_results },
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: RetrieveResponse = response.json().await?;

        Ok(body
            .retrieval_results
            .into_iter()
            .map(RetrievalRecord::from)
            .collect())
    }
}
