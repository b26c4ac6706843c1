//! Prediction result rendering

use crate::app::App;
use crate::state::{Prediction, SubmissionResult};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Lines of one prediction card: title, description, then one line per precaution
pub fn prediction_lines(prediction: &Prediction) -> Vec<Line<'_>> {
    let label = Style::default().add_modifier(Modifier::BOLD);

    let mut title = vec![Span::styled(
        prediction.title(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(probability) = prediction.probability_label() {
        title.push(Span::styled(
            format!("  ({probability})"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(vec![
            Span::styled("Description: ", label),
            Span::raw(prediction.description.as_str()),
        ]),
        Line::from(Span::styled("Precautions:", label)),
    ];
    lines.extend(
        prediction
            .precautions
            .iter()
            .map(|precaution| Line::from(format!("  • {precaution}"))),
    );
    lines
}

/// Block title, border color and body lines for a result
fn result_view(result: &SubmissionResult) -> (String, Color, Vec<Line<'_>>) {
    if let Some(message) = result.error() {
        return (
            " Error ".to_string(),
            Color::Red,
            vec![Line::from(Span::styled(
                message,
                Style::default().fg(Color::Red),
            ))],
        );
    }

    let predictions = result.predictions();
    let mut lines = Vec::new();
    for (i, prediction) in predictions.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(prediction_lines(prediction));
    }
    (
        format!(" Predictions ({}) ", predictions.len()),
        Color::Green,
        lines,
    )
}

/// Draw the result area: either the error message or one card per prediction
pub fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.state.form.result() else {
        return;
    };

    let (title, border, lines) = result_view(result);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.results_scroll, 0));

    frame.render_widget(paragraph, area);
}
