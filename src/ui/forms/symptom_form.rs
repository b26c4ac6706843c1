//! Symptom form rendering

use super::field_renderer::draw_entry_field;
use crate::app::App;
use crate::state::{EntryColumn, EntryField, Focus, FormButton};
use crate::ui::components::{render_button, ButtonKind, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const SEVERITY_WIDTH: u16 = 19;
const REMOVE_WIDTH: u16 = 10;
const ACTION_WIDTH: u16 = 17;

/// Rows needed to show the form with `entry_count` entries
pub fn form_height(entry_count: usize) -> u16 {
    let rows = u16::try_from(entry_count + 1).unwrap_or(u16::MAX);
    rows.saturating_mul(BUTTON_HEIGHT).saturating_add(2)
}

/// Draw the symptom rows followed by the Add/Predict buttons
pub fn draw_symptom_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focus = app.state.focus;

    let block = Block::default()
        .title(" Symptoms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .entries()
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, entry) in form.entries().iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(12),
                Constraint::Length(SEVERITY_WIDTH),
                Constraint::Length(REMOVE_WIDTH),
            ])
            .split(rows[index]);

        let is_focused = |column: EntryColumn| focus == Focus::Entry { index, column };

        draw_entry_field(
            frame,
            columns[0],
            EntryField::Symptom,
            &entry.symptom,
            is_focused(EntryColumn::Symptom),
        );
        draw_entry_field(
            frame,
            columns[1],
            EntryField::Severity,
            &entry.severity,
            is_focused(EntryColumn::Severity),
        );
        render_button(
            frame,
            columns[2],
            "Remove",
            ButtonKind::Danger,
            is_focused(EntryColumn::Remove),
            true,
        );
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ACTION_WIDTH),
            Constraint::Length(ACTION_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[form.len()]);

    render_button(
        frame,
        buttons[0],
        "Add Symptom",
        ButtonKind::Secondary,
        focus == Focus::Button(FormButton::AddSymptom),
        true,
    );

    let predict_label = if form.is_loading() {
        "Predicting..."
    } else {
        "Predict"
    };
    render_button(
        frame,
        buttons[1],
        predict_label,
        ButtonKind::Primary,
        focus == Focus::Button(FormButton::Predict),
        !form.is_loading(),
    );
}
