//! Prediction service data types

use super::forms::SymptomEntry;
use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::Value;

/// A single disease prediction returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_disease: String,
    pub description: String,
    pub precautions: Vec<String>,
    /// Model confidence in [0, 1], when the service reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl Prediction {
    pub fn title(&self) -> String {
        format!("Predicted Disease: {}", self.predicted_disease)
    }

    /// Lines in this prediction's card: title, description, precautions
    /// heading, then one per precaution
    pub fn line_count(&self) -> usize {
        3 + self.precautions.len()
    }

    /// Probability formatted as a percentage
    pub fn probability_label(&self) -> Option<String> {
        self.probability.map(|p| format!("{:.1}%", p * 100.0))
    }
}

/// Body of `POST /api/predict`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub symptoms: Vec<SymptomEntry>,
}

/// Decoded response body. The service answers with either an array of
/// predictions or an object carrying an `error` string.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResponse {
    Predictions(Vec<Prediction>),
    ServiceError { error: String },
}

impl PredictionResponse {
    /// Decode a response body by its top-level shape
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(mut fields) => match fields.remove("error") {
                Some(Value::String(error)) => Ok(Self::ServiceError { error }),
                _ => Err(serde_json::Error::custom(
                    "object response without an `error` string",
                )),
            },
            value => serde_json::from_value(value).map(Self::Predictions),
        }
    }
}

/// What the result area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Error(String),
    Predictions(Vec<Prediction>),
}

impl SubmissionResult {
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::Predictions(_) => None,
        }
    }

    pub fn predictions(&self) -> &[Prediction] {
        match self {
            Self::Error(_) => &[],
            Self::Predictions(predictions) => predictions,
        }
    }

    /// Lines the result area holds before wrapping; cards are separated by
    /// one blank line
    pub fn line_count(&self) -> usize {
        match self {
            Self::Error(_) => 1,
            Self::Predictions(predictions) => {
                let cards: usize = predictions.iter().map(Prediction::line_count).sum();
                cards + predictions.len().saturating_sub(1)
            }
        }
    }
}

impl From<PredictionResponse> for SubmissionResult {
    fn from(response: PredictionResponse) -> Self {
        match response {
            PredictionResponse::Predictions(predictions) => Self::Predictions(predictions),
            PredictionResponse::ServiceError { error } => Self::Error(error),
        }
    }
}
