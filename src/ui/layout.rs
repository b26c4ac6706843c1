//! Layout components (header, form/results placement, status bar)

use crate::app::App;
use crate::platform::{ADD_SHORTCUT, REMOVE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormLayout;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Page title shown in the header
pub const TITLE: &str = "HealthQuest Disease Prediction";

/// Widest the form and results get on large terminals
const MAX_CONTENT_WIDTH: u16 = 90;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    /// Only present while a result is shown
    pub results: Option<Rect>,
    pub status: Rect,
}

/// Split the screen for the current layout state.
///
/// Awaiting a submission, the form is centered on its own. Once a result is
/// held the form moves to the top and the results take the rest.
pub fn create_layout(area: Rect, layout: FormLayout, form_height: u16) -> ScreenAreas {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_width = outer[1].width.min(MAX_CONTENT_WIDTH);
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(content_width),
            Constraint::Fill(1),
        ])
        .split(outer[1])[1];

    let (form, results) = match layout {
        FormLayout::AwaitingSubmission => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(form_height),
                    Constraint::Fill(1),
                ])
                .split(content);
            (chunks[1], None)
        }
        FormLayout::ShowingResult => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(form_height), Constraint::Min(0)])
                .split(content);
            (chunks[0], Some(chunks[1]))
        }
    };

    ScreenAreas {
        header: outer[0],
        form,
        results,
        status: outer[2],
    }
}

/// Draw the page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Keyboard hints for the current layout
fn get_hints(layout: FormLayout) -> String {
    let base = format!(
        "Tab:next  Enter:press  {SUBMIT_SHORTCUT}:predict  {ADD_SHORTCUT}:add  {REMOVE_SHORTCUT}:remove"
    );
    match layout {
        FormLayout::AwaitingSubmission => base,
        FormLayout::ShowingResult => format!("{base}  PgUp/PgDn:scroll  Esc:clear"),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![Span::styled(
        get_hints(form.layout()),
        Style::default().fg(Color::White),
    )];

    if form.is_loading() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Predicting...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(at) = app.state.last_completed_at {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Updated {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.api_url.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
