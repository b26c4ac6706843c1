//! Form domain layer
//!
//! Symptom entries, their input rules, and the form controller that turns
//! them into a prediction request.

mod field;
mod form_state;

pub use field::{accepts_severity_input, EntryField, SymptomEntry};
pub use form_state::{FormLayout, FormState};
#[cfg(test)]
pub use form_state::FETCH_FAILED_MESSAGE;
