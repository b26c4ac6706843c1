//! HTTP client for the disease prediction service
//!
//! Posts the symptom payload as JSON and decodes whatever body comes back.
//! The response status is not consulted: the service reports its own errors
//! as `{"error": ...}` bodies.

use super::traits::PredictionApi;
use crate::state::{PredictionRequest, PredictionResponse};
use async_trait::async_trait;
use reqwest::Client;

/// Default prediction endpoint
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/predict";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Client for the prediction endpoint
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    url: String,
}

impl PredictionClient {
    /// Create a client posting to `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl PredictionApi for PredictionClient {
    async fn predict(&self, payload: PredictionRequest) -> Result<PredictionResponse, ApiError> {
        tracing::debug!(
            url = %self.url,
            symptoms = payload.symptoms.len(),
            "Posting prediction request"
        );

        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, bytes = body.len(), "Received prediction response");

        PredictionResponse::from_json(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
