//! On-screen keypad
//!
//! Mirrors the button layout of a pocket calculator, one button per input
//! token. Buttons can be clicked with the mouse and are highlighted briefly
//! when the matching key is typed.
//!
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{Operation, Token};
use crate::surface::Theme;

/// The input a keypad button produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert the decimal point
    Decimal,
    /// Choose a binary operator
    Operator(Operation),
    /// Collapse the pending expression
    Equals,
    /// Reset all state
    Clear,
    /// Drop the last character
    Delete,
    /// Divide the current operand by one hundred
    Percent,
}

impl KeypadAction {
    /// Returns the token this button feeds to the engine
    #[must_use]
    pub fn token(self) -> Token {
        match self {
            Self::Digit(d) => Token::Digit(d),
            Self::Decimal => Token::Point,
            Self::Operator(op) => Token::Operation(op),
            Self::Equals => Token::Equals,
            Self::Clear => Token::Clear,
            Self::Delete => Token::Delete,
            Self::Percent => Token::Percent,
        }
    }

    /// Returns the button that produces a given token
    #[must_use]
    pub fn for_token(token: Token) -> Self {
        match token {
            Token::Digit(d) => Self::Digit(d),
            Token::Point => Self::Decimal,
            Token::Operation(op) => Self::Operator(op),
            Token::Equals => Self::Equals,
            Token::Clear => Self::Clear,
            Token::Delete => Self::Delete,
            Token::Percent => Self::Percent,
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

/// A single keypad button with its grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The input this button produces
    pub action: KeypadAction,
    /// Grid row (0-indexed)
    pub row: u16,
    /// Grid column (0-indexed)
    pub col: u16,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a button at a grid position
    #[must_use]
    pub fn new(action: KeypadAction, row: u16, col: u16) -> Self {
        Self {
            action,
            row,
            col,
            pressed: false,
        }
    }
}

/// The keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: u16,
    cols: u16,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ⌫ % ÷
            KeypadButton::new(KeypadAction::Clear, 0, 0),
            KeypadButton::new(KeypadAction::Delete, 0, 1),
            KeypadButton::new(KeypadAction::Percent, 0, 2),
            KeypadButton::new(KeypadAction::Operator(Operation::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::new(KeypadAction::Digit(7), 1, 0),
            KeypadButton::new(KeypadAction::Digit(8), 1, 1),
            KeypadButton::new(KeypadAction::Digit(9), 1, 2),
            KeypadButton::new(KeypadAction::Operator(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButton::new(KeypadAction::Digit(4), 2, 0),
            KeypadButton::new(KeypadAction::Digit(5), 2, 1),
            KeypadButton::new(KeypadAction::Digit(6), 2, 2),
            KeypadButton::new(KeypadAction::Operator(Operation::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(KeypadAction::Digit(1), 3, 0),
            KeypadButton::new(KeypadAction::Digit(2), 3, 1),
            KeypadButton::new(KeypadAction::Digit(3), 3, 2),
            KeypadButton::new(KeypadAction::Operator(Operation::Add), 3, 3),
            // Row 4: 0 . =
            KeypadButton::new(KeypadAction::Digit(0), 4, 0),
            KeypadButton::new(KeypadAction::Decimal, 4, 1),
            KeypadButton::new(KeypadAction::Equals, 4, 2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Returns the button at a grid position, if any (the last row is short)
    #[must_use]
    pub fn button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Highlights the button for an action, releasing all others
    pub fn press(&mut self, action: KeypadAction) {
        for button in &mut self.buttons {
            button.pressed = button.action == action;
        }
    }

    /// Highlights the button whose action produces a token
    pub fn press_for_token(&mut self, token: Token) {
        self.press(KeypadAction::for_token(token));
    }

    /// Releases every button
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// Maps a click position inside the rendered area to a button action
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<KeypadAction> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The border eats one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols;
        let btn_height = (area.height - 2) / self.rows;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (rel_x - 1) / btn_width;
        let row = (rel_y - 1) / btn_height;
        self.button_at(row, col).map(|b| b.action)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    theme: Theme,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget over a keypad with the active theme
    #[must_use]
    pub fn new(keypad: &'a Keypad, theme: Theme) -> Self {
        Self { keypad, theme }
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if button.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        let digit_color = match self.theme {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        };
        match button.action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => {
                Style::default().fg(digit_color)
            }
            KeypadAction::Operator(_) => Style::default().fg(Color::Yellow),
            KeypadAction::Equals => Style::default().fg(Color::Green),
            KeypadAction::Clear => Style::default().fg(Color::Red),
            KeypadAction::Delete | KeypadAction::Percent => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols * 3 || inner.height < rows {
            return; // too small to render
        }

        let btn_width = inner.width / cols;
        let btn_height = inner.height / rows;

        for button in self.keypad.buttons() {
            let x = inner.x + button.col * btn_width;
            let y = inner.y + button.row * btn_height + btn_height / 2;
            let label = format!("[{}]", button.action.label());
            let label_x = x + btn_width.saturating_sub(3) / 2;
            buf.set_string(label_x, y, label, self.button_style(button));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction tests =====

    #[test]
    fn test_action_token_round_trip() {
        let actions = [
            KeypadAction::Digit(5),
            KeypadAction::Decimal,
            KeypadAction::Operator(Operation::Divide),
            KeypadAction::Equals,
            KeypadAction::Clear,
            KeypadAction::Delete,
            KeypadAction::Percent,
        ];
        for action in actions {
            assert_eq!(KeypadAction::for_token(action.token()), action);
        }
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(KeypadAction::Digit(7).label(), "7");
        assert_eq!(KeypadAction::Operator(Operation::Divide).label(), "÷");
        assert_eq!(KeypadAction::Clear.label(), "C");
        assert_eq!(KeypadAction::Delete.label(), "⌫");
        assert_eq!(KeypadAction::Percent.label(), "%");
    }

    // ===== Layout tests =====

    #[test]
    fn test_button_count() {
        assert_eq!(Keypad::new().button_count(), 19);
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Keypad::new().dimensions(), (5, 4));
    }

    #[test]
    fn test_layout_positions() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.button_at(0, 0).map(|b| b.action),
            Some(KeypadAction::Clear)
        );
        assert_eq!(
            keypad.button_at(0, 3).map(|b| b.action),
            Some(KeypadAction::Operator(Operation::Divide))
        );
        assert_eq!(
            keypad.button_at(4, 0).map(|b| b.action),
            Some(KeypadAction::Digit(0))
        );
        assert_eq!(
            keypad.button_at(4, 2).map(|b| b.action),
            Some(KeypadAction::Equals)
        );
    }

    #[test]
    fn test_last_row_is_short() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(4, 3), None);
    }

    #[test]
    fn test_every_digit_present() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(
                keypad
                    .buttons()
                    .any(|b| b.action == KeypadAction::Digit(d)),
                "digit {d} missing from keypad"
            );
        }
    }

    // ===== Press state tests =====

    #[test]
    fn test_press_highlights_one_button() {
        let mut keypad = Keypad::new();
        keypad.press(KeypadAction::Digit(5));
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].action, KeypadAction::Digit(5));
    }

    #[test]
    fn test_press_replaces_previous_highlight() {
        let mut keypad = Keypad::new();
        keypad.press(KeypadAction::Digit(5));
        keypad.press(KeypadAction::Equals);
        assert!(!keypad
            .buttons()
            .any(|b| b.pressed && b.action == KeypadAction::Digit(5)));
    }

    #[test]
    fn test_press_for_token() {
        let mut keypad = Keypad::new();
        keypad.press_for_token(Token::Point);
        assert!(keypad
            .buttons()
            .any(|b| b.pressed && b.action == KeypadAction::Decimal));
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.press(KeypadAction::Clear);
        keypad.release_all();
        assert!(!keypad.buttons().any(|b| b.pressed));
    }

    // ===== Hit test tests =====

    #[test]
    fn test_hit_test_corners() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        // Inside the border, first cell: C button
        assert_eq!(keypad.hit_test(area, 2, 2), Some(KeypadAction::Clear));
        // Outside the area entirely
        assert_eq!(keypad.hit_test(area, 30, 2), None);
        // On the border
        assert_eq!(keypad.hit_test(area, 0, 0), None);
    }

    #[test]
    fn test_hit_test_last_row_gap() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        // (width-2)=20 / 4 cols = 5 wide; (height-2)=10 / 5 rows = 2 tall.
        // Bottom-right cell has no button behind it.
        assert_eq!(keypad.hit_test(area, 17, 10), None);
    }

    #[test]
    fn test_hit_test_degenerate_area() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 3);
        assert_eq!(keypad.hit_test(area, 1, 1), None);
    }
}
