//! Prediction service client module for HTTP communication

mod client;
mod traits;

pub use client::{ApiError, PredictionClient, DEFAULT_API_URL};
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;
