//! Terminal user interface
//!
//! Thin presentation glue: keyboard mapping, the on-screen keypad, and the
//! themed rendering of display frames. Nothing here touches arithmetic
//! state directly; everything funnels tokens into the controller.

pub mod input;
pub mod keypad;
pub mod ui;

pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadAction, KeypadWidget};
