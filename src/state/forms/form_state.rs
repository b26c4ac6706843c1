//! Symptom form state and submission workflow

use super::field::{is_valid_symptom, EntryField, SymptomEntry};
use crate::api::{ApiError, PredictionApi};
use crate::state::{PredictionRequest, PredictionResponse, SubmissionResult};

/// Message shown for any transport or decode failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch prediction.";

/// Which of the two screen arrangements is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormLayout {
    /// Form centered, nothing else on screen
    #[default]
    AwaitingSubmission,
    /// Form moved to the top, results below it
    ShowingResult,
}

/// Form controller state: the entry rows, the result slot and the loading flag
#[derive(Debug, Clone)]
pub struct FormState {
    entries: Vec<SymptomEntry>,
    loading: bool,
    result: Option<SubmissionResult>,
    layout: FormLayout,
}

impl FormState {
    /// Initial state seeds one empty entry
    pub fn new() -> Self {
        Self {
            entries: vec![SymptomEntry::default()],
            loading: false,
            result: None,
            layout: FormLayout::AwaitingSubmission,
        }
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&SymptomEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn layout(&self) -> FormLayout {
        self.layout
    }

    /// Replace one field of the entry at `index`.
    ///
    /// Symptom values with anything other than letters or whitespace are
    /// dropped without touching state. Returns whether the value was applied.
    pub fn update_entry(&mut self, index: usize, field: EntryField, value: impl Into<String>) -> bool {
        let value = value.into();
        if field == EntryField::Symptom && !is_valid_symptom(&value) {
            tracing::trace!(index, "rejected symptom input");
            return false;
        }
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Append an empty entry
    pub fn add_entry(&mut self) {
        self.entries.push(SymptomEntry::default());
    }

    /// Remove the entry at `index`; out of range is a no-op
    pub fn remove_entry(&mut self, index: usize) -> Option<SymptomEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Entries that make it into a submission, in display order
    pub fn submittable_entries(&self) -> Vec<SymptomEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_submittable())
            .cloned()
            .collect()
    }

    /// Capture the payload and mark a request as in flight.
    ///
    /// The returned payload is a copy; later edits do not reach it.
    pub fn begin_submission(&mut self) -> PredictionRequest {
        let payload = PredictionRequest {
            symptoms: self.submittable_entries(),
        };
        for entry in payload.symptoms.iter().filter(|e| e.severity_value().is_none()) {
            tracing::warn!(
                symptom = %entry.symptom,
                severity = %entry.severity,
                "severity outside 1-10, forwarding as entered"
            );
        }
        self.loading = true;
        tracing::info!(symptoms = payload.symptoms.len(), "submitting prediction request");
        payload
    }

    /// Store the outcome of the in-flight request and clear `loading`
    pub fn complete_submission(&mut self, outcome: Result<PredictionResponse, ApiError>) {
        let result = match outcome {
            Ok(response) => {
                let result = SubmissionResult::from(response);
                match &result {
                    SubmissionResult::Predictions(p) => {
                        tracing::info!(count = p.len(), "received predictions")
                    }
                    SubmissionResult::Error(e) => {
                        tracing::warn!(error = %e, "prediction service reported an error")
                    }
                }
                result
            }
            Err(err) => {
                tracing::error!(error = %err, "prediction request failed");
                SubmissionResult::Error(FETCH_FAILED_MESSAGE.to_string())
            }
        };
        self.result = Some(result);
        self.layout = FormLayout::ShowingResult;
        self.loading = false;
    }

    /// Run a whole submission inline against `api`
    #[allow(dead_code)]
    pub async fn submit<A>(&mut self, api: &A)
    where
        A: PredictionApi + ?Sized,
    {
        let payload = self.begin_submission();
        let outcome = api.predict(payload).await;
        self.complete_submission(outcome);
    }

    /// Drop the displayed result but keep the entries
    pub fn clear_result(&mut self) {
        self.result = None;
        self.layout = FormLayout::AwaitingSubmission;
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
