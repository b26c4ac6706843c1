//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
    Danger,
}

impl ButtonKind {
    fn accent(&self) -> Color {
        match self {
            Self::Primary => Color::Cyan,
            Self::Secondary => Color::Green,
            Self::Danger => Color::Red,
        }
    }
}

/// Render a bordered button; disabled buttons are greyed out and never highlighted
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    kind: ButtonKind,
    is_selected: bool,
    is_enabled: bool,
) {
    let accent = kind.accent();
    let highlighted = is_selected && is_enabled;

    let border_style = if highlighted {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if highlighted {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
