//! Themed rendering of display frames

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::surface::{DisplayFrame, FlashStyle, Theme};

use super::keypad::{Keypad, KeypadWidget};

/// Renders one frame of the calculator
pub fn render(frame: &mut Frame, display: &DisplayFrame, keypad: &Keypad, theme: Theme) {
    let area = frame.area();
    let (previous_area, current_area, keypad_rect) = layout(area);

    frame.render_widget(Block::default().style(background(theme)), area);

    let previous = Paragraph::new(display.previous.as_str())
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(previous, previous_area);

    let current = Paragraph::new(display.current.as_str())
        .alignment(Alignment::Right)
        .style(current_style(display.style, theme))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(current, current_area);

    frame.render_widget(KeypadWidget::new(keypad, theme), keypad_rect);
}

/// Returns the screen region the keypad occupies, for mouse hit testing
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area).2
}

fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // pending expression
            Constraint::Length(2), // current value
            Constraint::Min(7),    // keypad
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn background(theme: Theme) -> Style {
    match theme {
        Theme::Dark => Style::default().bg(Color::Black).fg(Color::White),
        Theme::Light => Style::default().bg(Color::White).fg(Color::Black),
    }
}

fn current_style(style: FlashStyle, theme: Theme) -> Style {
    match style {
        FlashStyle::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        FlashStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        FlashStyle::Normal => background(theme).add_modifier(Modifier::BOLD),
    }
}
