//! Trait abstraction for the prediction client to enable mocking in tests

use super::client::ApiError;
use crate::state::{PredictionRequest, PredictionResponse};
use async_trait::async_trait;

/// Trait for prediction service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Submit symptoms and decode the service's answer
    async fn predict(&self, payload: PredictionRequest) -> Result<PredictionResponse, ApiError>;
}
