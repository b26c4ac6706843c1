//! Application state and core logic

use crate::api::{ApiError, PredictionApi, PredictionClient};
use crate::config::TuiConfig;
use crate::platform::is_action_modifier;
use crate::state::{AppState, EntryColumn, Focus, FormButton, PredictionResponse};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Lines moved by PageUp/PageDown in the result area
const RESULTS_PAGE: u16 = 5;

type Outcome = Result<PredictionResponse, ApiError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Prediction service client
    api: Arc<dyn PredictionApi>,
    /// Endpoint shown in the status bar
    pub api_url: String,
    /// Completed requests flow back to the UI loop through this channel
    outcome_tx: UnboundedSender<Outcome>,
    outcome_rx: UnboundedReceiver<Outcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &TuiConfig) -> Self {
        let client = PredictionClient::new(config.resolved_api_url());
        let api_url = client.url().to_string();
        Self::with_api(Arc::new(client), api_url)
    }

    /// Create an App on top of any prediction client
    pub fn with_api(api: Arc<dyn PredictionApi>, api_url: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            api_url,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Dispatch the form to the prediction service on a background task.
    ///
    /// Ignored while a request is in flight, like a disabled submit button.
    pub fn submit(&mut self) {
        if self.state.form.is_loading() {
            tracing::debug!("Submit ignored while a prediction is in flight");
            return;
        }

        let payload = self.state.form.begin_submission();
        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = api.predict(payload).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("UI closed before the prediction arrived");
            }
        });
    }

    /// Back to a fresh form. Ignored while a request is in flight so its
    /// outcome never lands on the reset form.
    pub fn reset(&mut self) {
        if self.state.form.is_loading() {
            tracing::debug!("Reset ignored while a prediction is in flight");
            return;
        }
        self.state.reset();
    }

    /// Apply any finished request. Returns true if state changed.
    pub fn poll_submission(&mut self) -> bool {
        let mut updated = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish_submission(outcome);
            updated = true;
        }
        updated
    }

    fn finish_submission(&mut self, outcome: Outcome) {
        self.state.form.complete_submission(outcome);
        self.state.results_scroll = 0;
        self.state.last_completed_at = Some(Local::now());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Up => self.state.focus_up(),
            KeyCode::Down => self.state.focus_down(),
            KeyCode::PageDown => self.state.scroll_results_down(RESULTS_PAGE),
            KeyCode::PageUp => self.state.scroll_results_up(RESULTS_PAGE),
            KeyCode::Esc => self.state.clear_result(),
            // Shortcuts (work from anywhere)
            KeyCode::Char('s') if is_action_modifier(key.modifiers) => self.submit(),
            KeyCode::Char('n') if is_action_modifier(key.modifiers) => self.state.add_entry(),
            KeyCode::Char('d') if is_action_modifier(key.modifiers) => {
                self.state.remove_focused_entry()
            }
            KeyCode::Char('r') if is_action_modifier(key.modifiers) => self.reset(),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::Char(c) if !is_action_modifier(key.modifiers) => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
    }

    /// Enter on a button presses it; Enter in a text field submits the form
    fn activate_focused(&mut self) {
        match self.state.focus {
            Focus::Button(FormButton::AddSymptom) => self.state.add_entry(),
            Focus::Button(FormButton::Predict) => self.submit(),
            Focus::Entry {
                index,
                column: EntryColumn::Remove,
            } => self.state.remove_entry(index),
            Focus::Entry { .. } => self.submit(),
        }
    }
}
