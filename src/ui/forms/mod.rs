//! Form rendering module
//!
//! - `field_renderer`: single entry field
//! - `symptom_form`: the symptom rows and the form buttons

mod field_renderer;
mod symptom_form;

pub use symptom_form::{draw_symptom_form, form_height};
