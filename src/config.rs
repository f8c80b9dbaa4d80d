use std::env;

use crate::error::{AppError, Result};

/// Fallback region when neither the invocation nor the environment names one.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Default minimum relevance score for retrieval results.
pub const DEFAULT_MIN_SCORE: f64 = 0.25;

/// Default maximum number of results requested from the knowledge base.
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Process-wide configuration, loaded once at startup and shared by
/// reference. Handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Knowledge base holding product information.
    pub product_info_kb_id: String,
    /// Knowledge base holding pet care reference material.
    pub pet_care_kb_id: String,
    /// Region used when an invocation does not select one.
    pub default_region: String,
    /// Optional override for the retrieval collaborator base URL.
    /// When unset, the region-scoped managed endpoint is used.
    pub retrieval_endpoint: Option<String>,
    /// Score threshold applied when an invocation does not provide one.
    pub default_min_score: f64,
    /// Result count requested when an invocation does not provide one.
    pub default_result_count: u32,
    /// Timeout for a single collaborator call, in seconds.
    pub request_timeout_secs: u64,
    pub shutdown_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// `KNOWLEDGE_BASE_1_ID` (product info) and `KNOWLEDGE_BASE_2_ID`
    /// (pet care) are required; missing either is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let product_info_kb_id = require_env("KNOWLEDGE_BASE_1_ID")?;
        let pet_care_kb_id = require_env("KNOWLEDGE_BASE_2_ID")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8080)?,
            product_info_kb_id,
            pet_care_kb_id,
            default_region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            retrieval_endpoint: env::var("RETRIEVAL_ENDPOINT").ok(),
            default_min_score: parse_env("DEFAULT_MIN_SCORE", DEFAULT_MIN_SCORE)?,
            default_result_count: parse_env("DEFAULT_RESULT_COUNT", DEFAULT_RESULT_COUNT)?,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT", 30)?,
            shutdown_timeout_secs: parse_env("SHUTDOWN_TIMEOUT", 30)?,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigError(format!(
            "Required environment variable {} must be set",
            name
        ))),
    }
}

fn parse_env<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| AppError::ConfigError(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
