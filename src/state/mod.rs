//! Application state module

mod app_state;
mod forms;
mod prediction;

pub use app_state::*;
pub use forms::*;
pub use prediction::*;
