//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod results;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let form = &app.state.form;
    let areas = layout::create_layout(frame.area(), form.layout(), forms::form_height(form.len()));

    layout::draw_header(frame, areas.header);
    forms::draw_symptom_form(frame, areas.form, app);
    if let Some(results_area) = areas.results {
        results::draw_results(frame, results_area, app);
    }
    layout::draw_status_bar(frame, areas.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockPredictionApi};
    use crate::state::{Prediction, PredictionResponse, FETCH_FAILED_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::with_api(
            Arc::new(MockPredictionApi::new()),
            "http://test/api/predict".to_string(),
        )
    }

    /// Render one frame and return the screen as text rows
    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn row_of(screen: &[String], needle: &str) -> Option<usize> {
        screen.iter().position(|row| row.contains(needle))
    }

    #[test]
    fn test_initial_screen_shows_form_only() {
        let screen = render(&test_app());
        assert!(row_of(&screen, layout::TITLE).is_some());
        assert!(row_of(&screen, " Symptom ").is_some());
        assert!(row_of(&screen, "Severity (1-10)").is_some());
        assert!(row_of(&screen, "Add Symptom").is_some());
        assert!(row_of(&screen, "Predict").is_some());
        assert!(row_of(&screen, "Predictions").is_none());
    }

    #[test]
    fn test_predictions_render_as_cards_in_order() {
        let mut app = test_app();
        app.state.form.begin_submission();
        app.state
            .form
            .complete_submission(Ok(PredictionResponse::Predictions(vec![Prediction {
                predicted_disease: "Flu".to_string(),
                description: "desc".to_string(),
                precautions: vec!["rest".to_string(), "fluids".to_string()],
                probability: None,
            }])));

        let screen = render(&app);

        let title = row_of(&screen, "Predicted Disease: Flu").unwrap();
        let rest = row_of(&screen, "• rest").unwrap();
        let fluids = row_of(&screen, "• fluids").unwrap();
        assert!(row_of(&screen, "Description: desc").is_some());
        assert!(title < rest && rest < fluids);
        assert_eq!(
            screen.iter().filter(|row| row.contains("Predicted Disease:")).count(),
            1
        );
    }

    #[test]
    fn test_form_moves_to_top_when_result_shown() {
        let mut app = test_app();
        let before = row_of(&render(&app), "Add Symptom").unwrap();

        app.state.form.begin_submission();
        app.state
            .form
            .complete_submission(Ok(PredictionResponse::Predictions(vec![])));
        let after = row_of(&render(&app), "Add Symptom").unwrap();

        assert!(after < before);
    }

    #[test]
    fn test_error_renders_message_without_cards() {
        let mut app = test_app();
        app.state.form.begin_submission();
        app.state
            .form
            .complete_submission(Err(ApiError::Decode("eof".to_string())));

        let screen = render(&app);

        assert!(row_of(&screen, FETCH_FAILED_MESSAGE).is_some());
        assert!(row_of(&screen, "Predicted Disease").is_none());
    }

    #[test]
    fn test_predict_button_disabled_while_loading() {
        let mut app = test_app();
        app.state.form.begin_submission();

        let screen = render(&app);

        assert!(row_of(&screen, "Predicting...").is_some());
    }
}
