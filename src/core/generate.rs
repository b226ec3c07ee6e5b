//! Text-generation backend capability.
//!
//! The dispatcher only sees the [`TextGenerator`] trait; the hosted
//! watsonx-style endpoint lives behind [`GraniteClient`]. One blocking
//! round trip per call: no retry, no caching, no streaming.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::BackendConfig;

/// Wire shape returned by the generation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub results: Vec<GenerationCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationCandidate {
    pub generated_text: String,
}

/// Transport-level failure from the concrete backend client.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("text generation request failed")]
    Transport(#[from] reqwest::Error),
    #[error("text generation endpoint returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

/// Capability interface to the generation backend. Injected into the
/// dispatcher at construction time; lifecycle owned by the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerateError>;
}

/// Reqwest client for a hosted Granite text-generation endpoint.
pub struct GraniteClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    project_id: String,
}

impl GraniteClient {
    pub fn new(config: &BackendConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model_id: config.model_id.clone(),
            project_id: config.project_id.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for GraniteClient {
    #[instrument(skip(self, prompt), fields(model_id = %self.model_id, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model_id": self.model_id,
                "project_id": self.project_id,
                "input": prompt,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status { status });
        }

        let result = response.json::<GenerationResult>().await?;
        debug!(candidates = result.results.len(), "generation backend responded");
        Ok(result)
    }
}
