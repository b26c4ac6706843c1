//! Application state definitions

use super::forms::{accepts_severity_input, EntryField, FormState};
use chrono::{DateTime, Local};

/// Column of an entry row that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryColumn {
    Symptom,
    Severity,
    Remove,
}

impl EntryColumn {
    /// The text field behind this column, if it is one
    pub fn field(&self) -> Option<EntryField> {
        match self {
            Self::Symptom => Some(EntryField::Symptom),
            Self::Severity => Some(EntryField::Severity),
            Self::Remove => None,
        }
    }
}

/// Buttons below the entry rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    AddSymptom,
    Predict,
}

/// What keyboard input currently goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Entry { index: usize, column: EntryColumn },
    Button(FormButton),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Entry {
            index: 0,
            column: EntryColumn::Symptom,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormState,
    pub focus: Focus,
    /// Scroll offset of the result area
    pub results_scroll: u16,
    /// When the last response (or failure) came back
    pub last_completed_at: Option<DateTime<Local>>,
}

impl AppState {
    /// Tab order: each row's symptom, severity, remove, then the buttons
    fn focus_order(&self) -> Vec<Focus> {
        let mut order = Vec::with_capacity(self.form.len() * 3 + 2);
        for index in 0..self.form.len() {
            for column in [EntryColumn::Symptom, EntryColumn::Severity, EntryColumn::Remove] {
                order.push(Focus::Entry { index, column });
            }
        }
        order.push(Focus::Button(FormButton::AddSymptom));
        order.push(Focus::Button(FormButton::Predict));
        order
    }

    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if current == 0 {
            order[order.len() - 1]
        } else {
            order[current - 1]
        };
    }

    /// Move to the row above, keeping the column
    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            Focus::Entry { index, column } => Focus::Entry {
                index: index.saturating_sub(1),
                column,
            },
            Focus::Button(_) if !self.form.is_empty() => Focus::Entry {
                index: self.form.len() - 1,
                column: EntryColumn::Symptom,
            },
            other => other,
        };
    }

    /// Move to the row below, falling through to the buttons after the last row
    pub fn focus_down(&mut self) {
        self.focus = match self.focus {
            Focus::Entry { index, column } if index + 1 < self.form.len() => Focus::Entry {
                index: index + 1,
                column,
            },
            Focus::Entry { .. } => Focus::Button(FormButton::AddSymptom),
            other => other,
        };
    }

    /// Keep focus on something that still exists after rows were removed
    pub fn clamp_focus(&mut self) {
        if let Focus::Entry { index, column } = self.focus {
            if self.form.is_empty() {
                self.focus = Focus::Button(FormButton::AddSymptom);
            } else if index >= self.form.len() {
                self.focus = Focus::Entry {
                    index: self.form.len() - 1,
                    column,
                };
            }
        }
    }

    /// The text field under focus, if any
    pub fn focused_field(&self) -> Option<(usize, EntryField)> {
        match self.focus {
            Focus::Entry { index, column } => column.field().map(|field| (index, field)),
            Focus::Button(_) => None,
        }
    }

    /// Apply a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        let Some((index, field)) = self.focused_field() else {
            return;
        };
        let Some(entry) = self.form.entry(index) else {
            return;
        };
        let mut value = entry.get(field).to_string();
        value.push(c);
        if field == EntryField::Severity && !accepts_severity_input(&value) {
            return;
        }
        self.form.update_entry(index, field, value);
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let Some((index, field)) = self.focused_field() else {
            return;
        };
        let Some(entry) = self.form.entry(index) else {
            return;
        };
        let mut value = entry.get(field).to_string();
        if value.pop().is_some() {
            self.form.update_entry(index, field, value);
        }
    }

    /// Append a row and put the cursor in its symptom field
    pub fn add_entry(&mut self) {
        self.form.add_entry();
        self.focus = Focus::Entry {
            index: self.form.len() - 1,
            column: EntryColumn::Symptom,
        };
    }

    /// Remove the row under focus
    pub fn remove_focused_entry(&mut self) {
        if let Focus::Entry { index, .. } = self.focus {
            self.remove_entry(index);
        }
    }

    pub fn remove_entry(&mut self, index: usize) {
        self.form.remove_entry(index);
        self.clamp_focus();
    }

    pub fn clear_result(&mut self) {
        self.form.clear_result();
        self.results_scroll = 0;
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.focus = Focus::default();
        self.results_scroll = 0;
    }

    /// Scroll down, stopping with the last result line at the top
    pub fn scroll_results_down(&mut self, lines: u16) {
        let max = self
            .form
            .result()
            .map(|result| result.line_count().saturating_sub(1))
            .unwrap_or(0);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.results_scroll = self.results_scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_results_up(&mut self, lines: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Prediction, PredictionResponse, SymptomEntry};

    fn entry_focus(index: usize, column: EntryColumn) -> Focus {
        Focus::Entry { index, column }
    }

    #[test]
    fn test_default_focus_is_first_symptom() {
        let state = AppState::default();
        assert_eq!(state.focus, entry_focus(0, EntryColumn::Symptom));
        assert_eq!(state.focused_field(), Some((0, EntryField::Symptom)));
    }

    #[test]
    fn test_next_focus_cycles_through_row_and_buttons() {
        let mut state = AppState::default();
        let expected = [
            entry_focus(0, EntryColumn::Severity),
            entry_focus(0, EntryColumn::Remove),
            Focus::Button(FormButton::AddSymptom),
            Focus::Button(FormButton::Predict),
            entry_focus(0, EntryColumn::Symptom),
        ];
        for focus in expected {
            state.next_focus();
            assert_eq!(state.focus, focus);
        }
    }

    #[test]
    fn test_prev_focus_wraps_to_predict() {
        let mut state = AppState::default();
        state.prev_focus();
        assert_eq!(state.focus, Focus::Button(FormButton::Predict));
    }

    #[test]
    fn test_focus_up_and_down() {
        let mut state = AppState::default();
        state.add_entry();
        state.focus = entry_focus(0, EntryColumn::Severity);

        state.focus_down();
        assert_eq!(state.focus, entry_focus(1, EntryColumn::Severity));
        state.focus_down();
        assert_eq!(state.focus, Focus::Button(FormButton::AddSymptom));
        state.focus_up();
        assert_eq!(state.focus, entry_focus(1, EntryColumn::Symptom));
        state.focus_up();
        state.focus_up();
        assert_eq!(state.focus, entry_focus(0, EntryColumn::Symptom));
    }

    #[test]
    fn test_input_char_builds_symptom() {
        let mut state = AppState::default();
        for c in "Fever123".chars() {
            state.input_char(c);
        }
        assert_eq!(state.form.entry(0).unwrap().symptom, "Fever");
    }

    #[test]
    fn test_severity_input_follows_widget_rule() {
        let mut state = AppState::default();
        state.focus = entry_focus(0, EntryColumn::Severity);
        state.input_char('0');
        assert_eq!(state.form.entry(0).unwrap().severity, "");
        state.input_char('1');
        state.input_char('0');
        assert_eq!(state.form.entry(0).unwrap().severity, "10");
        state.input_char('0');
        assert_eq!(state.form.entry(0).unwrap().severity, "10");
        state.backspace();
        state.input_char('x');
        assert_eq!(state.form.entry(0).unwrap().severity, "1");
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let mut state = AppState::default();
        state.backspace();
        assert_eq!(state.form.entry(0).unwrap(), &SymptomEntry::default());
    }

    #[test]
    fn test_input_on_button_is_ignored() {
        let mut state = AppState::default();
        state.focus = Focus::Button(FormButton::Predict);
        state.input_char('a');
        assert_eq!(state.form.entry(0).unwrap(), &SymptomEntry::default());
    }

    #[test]
    fn test_add_entry_focuses_new_row() {
        let mut state = AppState::default();
        state.add_entry();
        assert_eq!(state.form.len(), 2);
        assert_eq!(state.focus, entry_focus(1, EntryColumn::Symptom));
    }

    #[test]
    fn test_remove_last_row_clamps_focus() {
        let mut state = AppState::default();
        state.add_entry();
        state.focus = entry_focus(1, EntryColumn::Remove);
        state.remove_focused_entry();
        assert_eq!(state.form.len(), 1);
        assert_eq!(state.focus, entry_focus(0, EntryColumn::Remove));

        state.remove_focused_entry();
        assert!(state.form.is_empty());
        assert_eq!(state.focus, Focus::Button(FormButton::AddSymptom));
    }

    #[test]
    fn test_focus_order_with_no_rows() {
        let mut state = AppState::default();
        state.remove_entry(0);
        state.next_focus();
        assert_eq!(state.focus, Focus::Button(FormButton::Predict));
        state.next_focus();
        assert_eq!(state.focus, Focus::Button(FormButton::AddSymptom));
        state.focus_up();
        assert_eq!(state.focus, Focus::Button(FormButton::AddSymptom));
    }

    fn show_predictions(state: &mut AppState, precautions: usize) {
        state.form.begin_submission();
        state
            .form
            .complete_submission(Ok(PredictionResponse::Predictions(vec![Prediction {
                predicted_disease: "Flu".to_string(),
                description: "desc".to_string(),
                precautions: vec!["rest".to_string(); precautions],
                probability: None,
            }])));
    }

    #[test]
    fn test_reset_restores_focus_and_scroll() {
        let mut state = AppState::default();
        state.add_entry();
        show_predictions(&mut state, 5);
        state.scroll_results_down(5);
        assert_eq!(state.results_scroll, 5);
        state.reset();
        assert_eq!(state.form.len(), 1);
        assert_eq!(state.focus, Focus::default());
        assert_eq!(state.results_scroll, 0);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        show_predictions(&mut state, 5);
        state.scroll_results_up(3);
        assert_eq!(state.results_scroll, 0);
        state.scroll_results_down(4);
        state.scroll_results_up(1);
        assert_eq!(state.results_scroll, 3);
    }

    #[test]
    fn test_scroll_stops_at_last_result_line() {
        let mut state = AppState::default();
        state.scroll_results_down(5);
        assert_eq!(state.results_scroll, 0);

        // Eight card lines: title, description, heading, five precautions
        show_predictions(&mut state, 5);
        state.scroll_results_down(5);
        state.scroll_results_down(5);
        assert_eq!(state.results_scroll, 7);
        state.scroll_results_down(u16::MAX);
        assert_eq!(state.results_scroll, 7);
    }
}
