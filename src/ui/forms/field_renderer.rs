//! Field rendering utilities for forms

use crate::state::EntryField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one text input of a symptom entry
pub fn draw_entry_field(
    frame: &mut Frame,
    area: Rect,
    field: EntryField,
    value: &str,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = if value.is_empty() && !is_active {
        vec![Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(value)]
    };
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
