//! Keyboard mapping
//!
//! A pure translation layer from key events onto the input token alphabet,
//! plus the two surface-level actions (theme toggle, quit) that never reach
//! the engine. Raw mode makes suppressing terminal defaults unnecessary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Token;

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the state machine
    Input(Token),
    /// Flip between light and dark themes
    ToggleTheme,
    /// Leave the application
    Quit,
    /// Ignored input
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Enter => KeyAction::Input(Token::Equals),
            KeyCode::Backspace => KeyAction::Input(Token::Delete),
            KeyCode::Esc => KeyAction::Input(Token::Clear),
            KeyCode::Char('t' | 'T') => KeyAction::ToggleTheme,
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Token::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            _ => KeyAction::None,
        }
    }
}
