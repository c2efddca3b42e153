//! Presentation adapter layer
//!
//! The engine knows nothing about rendering; this module defines the seams
//! the presentation plugs into (render sink, preference store) and the
//! controller that wires input tokens through the engine and projects state
//! to the sink after every call.

pub mod controller;
pub mod flash;
pub mod mock;
pub mod theme;

pub use controller::Controller;
pub use flash::{Flash, FlashKind, FlashStyle};
pub use theme::Theme;

/// One refresh of the rendering surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFrame {
    /// The current-value line
    pub current: String,
    /// The pending-expression line
    pub previous: String,
    /// Transient error/success styling for the current-value line
    pub style: FlashStyle,
}

/// Where display frames go
///
/// Implemented by the TUI screen in the binary and by [`mock::MockSurface`]
/// in tests. The controller receives the sink at construction.
pub trait RenderSink {
    /// Presents a freshly projected frame
    fn render(&mut self, frame: &DisplayFrame);
}

/// A persistent key-value store for user preferences
///
/// Used solely for the `"theme"` key. Reads happen once at startup, writes
/// on each toggle; last writer wins.
pub trait PreferenceStore {
    /// Returns the stored value for a key, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Stores a value for a key
    fn set(&mut self, key: &str, value: &str);
}
