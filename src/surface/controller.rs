//! The adapter between input tokens and the rendering surface
//!
//! The controller owns the engine, a render sink, and a preference store,
//! all injected at construction. Every handled token runs through the
//! engine, updates the transient flash, and pushes a fresh frame to the
//! sink; the event loop drives flash expiry through [`Controller::tick`].

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::core::{Engine, Outcome, Token};

use super::flash::{Flash, FlashKind, FlashStyle};
use super::theme::{self, Theme};
use super::{DisplayFrame, PreferenceStore, RenderSink};

/// Wires the state machine to a rendering surface and preference store
#[derive(Debug)]
pub struct Controller<S: RenderSink, P: PreferenceStore> {
    engine: Engine,
    sink: S,
    prefs: P,
    theme: Theme,
    flash: Option<Flash>,
}

impl<S: RenderSink, P: PreferenceStore> Controller<S, P> {
    /// Creates a controller, loads the persisted theme, and renders the
    /// initial frame
    pub fn new(sink: S, prefs: P) -> Self {
        let theme = prefs
            .get(theme::PREF_KEY)
            .and_then(|v| Theme::from_pref(&v))
            .unwrap_or_default();
        let mut controller = Self {
            engine: Engine::new(),
            sink,
            prefs,
            theme,
            flash: None,
        };
        controller.render();
        controller
    }

    /// Handles one input token at the given instant
    ///
    /// Any pending flash is superseded: replaced when the token raises a new
    /// signal, cleared otherwise, so the display always reflects the latest
    /// action.
    pub fn handle(&mut self, token: Token, now: Instant) {
        let outcome = self.engine.apply(token);
        self.flash = match outcome {
            Outcome::Updated => None,
            Outcome::Computed => {
                debug!("computation collapsed");
                Some(Flash::success(now))
            }
            Outcome::Error(err) => {
                warn!(%err, "input rejected");
                Some(Flash::error(err, now))
            }
        };
        self.render();
    }

    /// Reverts an expired flash; re-renders only when something changed
    ///
    /// Only the presentational flash is touched here, never the arithmetic
    /// state, so a late tick after further input is harmless.
    pub fn tick(&mut self, now: Instant) {
        if self.flash.as_ref().is_some_and(|f| f.is_expired(now)) {
            self.flash = None;
            self.render();
        }
    }

    /// Flips the theme and persists the choice
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.prefs.set(theme::PREF_KEY, self.theme.as_pref());
        info!(theme = self.theme.as_pref(), "theme changed");
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the deadline of the pending flash, for event-loop timeouts
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.flash.as_ref().map(Flash::expires_at)
    }

    /// Projects the current state (and any flash overlay) into a frame
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        match &self.flash {
            Some(flash) => match flash.kind() {
                FlashKind::Error(err) => DisplayFrame {
                    current: err.to_string(),
                    previous: self.engine.display_previous(),
                    style: FlashStyle::Error,
                },
                FlashKind::Success => DisplayFrame {
                    current: self.engine.display_current(),
                    previous: self.engine.display_previous(),
                    style: FlashStyle::Success,
                },
            },
            None => DisplayFrame {
                current: self.engine.display_current(),
                previous: self.engine.display_previous(),
                style: FlashStyle::Normal,
            },
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the render sink (tests inspect recorded frames through this)
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the preference store
    #[must_use]
    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.sink.render(&frame);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::flash::{ERROR_CLEAR, SUCCESS_CLEAR};
    use super::super::mock::{MemoryStore, MockSurface};
    use super::*;
    use crate::core::Operation;

    fn controller() -> Controller<MockSurface, MemoryStore> {
        Controller::new(MockSurface::new(), MemoryStore::new())
    }

    fn type_keys(c: &mut Controller<MockSurface, MemoryStore>, keys: &str, now: Instant) {
        for ch in keys.chars() {
            let token = Token::from_char(ch).expect("test key must map to a token");
            c.handle(token, now);
        }
    }

    // ===== Construction tests =====

    #[test]
    fn test_initial_frame_rendered() {
        let c = controller();
        let frame = c.sink().last().expect("initial frame");
        assert_eq!(frame.current, "0");
        assert_eq!(frame.previous, "");
        assert_eq!(frame.style, FlashStyle::Normal);
    }

    #[test]
    fn test_theme_loaded_from_store() {
        let mut store = MemoryStore::new();
        store.set(theme::PREF_KEY, "dark");
        let c = Controller::new(MockSurface::new(), store);
        assert_eq!(c.theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(theme::PREF_KEY, "mauve");
        let c = Controller::new(MockSurface::new(), store);
        assert_eq!(c.theme(), Theme::Light);
    }

    // ===== Token handling tests =====

    #[test]
    fn test_each_token_renders_a_frame() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "12", now);
        // initial frame + one per token
        assert_eq!(c.sink().frames().len(), 3);
        assert_eq!(c.sink().last().expect("frame").current, "12");
    }

    #[test]
    fn test_pending_line_projection() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "1234*", now);
        let frame = c.sink().last().expect("frame");
        assert_eq!(frame.previous, "1,234 ×");
        assert_eq!(frame.current, "");
    }

    #[test]
    fn test_success_flash_after_equals() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "3+4=", now);
        let frame = c.sink().last().expect("frame");
        assert_eq!(frame.current, "7");
        assert_eq!(frame.style, FlashStyle::Success);
    }

    #[test]
    fn test_error_flash_replaces_current_line() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "5/0=", now);
        let frame = c.sink().last().expect("frame");
        assert_eq!(frame.current, "Cannot divide by zero");
        assert_eq!(frame.style, FlashStyle::Error);
        // arithmetic state underneath is untouched
        assert_eq!(c.engine().current(), "0");
        assert_eq!(c.engine().previous(), "5");
        assert_eq!(c.engine().operation(), Some(Operation::Divide));
    }

    // ===== Flash expiry tests =====

    #[test]
    fn test_error_reverts_after_deadline() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "5/0=", now);
        c.tick(now + Duration::from_millis(100));
        assert_eq!(c.sink().last().expect("frame").style, FlashStyle::Error);
        c.tick(now + ERROR_CLEAR);
        let frame = c.sink().last().expect("frame");
        assert_eq!(frame.current, "0");
        assert_eq!(frame.previous, "5 ÷");
        assert_eq!(frame.style, FlashStyle::Normal);
    }

    #[test]
    fn test_success_highlight_clears() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "3+4=", now);
        c.tick(now + SUCCESS_CLEAR);
        let frame = c.sink().last().expect("frame");
        assert_eq!(frame.current, "7");
        assert_eq!(frame.style, FlashStyle::Normal);
    }

    #[test]
    fn test_tick_without_flash_does_not_render() {
        let mut c = controller();
        let rendered = c.sink().frames().len();
        c.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(c.sink().frames().len(), rendered);
    }

    #[test]
    fn test_new_action_supersedes_error_flash() {
        let mut c = controller();
        let now = Instant::now();
        type_keys(&mut c, "5/0=", now);
        // user keeps typing before the error timer fires
        c.handle(Token::Clear, now + Duration::from_millis(500));
        let frame = c.sink().last().expect("frame").clone();
        assert_eq!(frame.current, "0");
        assert_eq!(frame.style, FlashStyle::Normal);
        // the stale deadline must not revert anything afterwards
        let rendered = c.sink().frames().len();
        c.tick(now + ERROR_CLEAR);
        assert_eq!(c.sink().frames().len(), rendered);
    }

    #[test]
    fn test_next_deadline_tracks_flash() {
        let mut c = controller();
        assert_eq!(c.next_deadline(), None);
        let now = Instant::now();
        type_keys(&mut c, "3+4=", now);
        assert_eq!(c.next_deadline(), Some(now + SUCCESS_CLEAR));
    }

    // ===== Theme tests =====

    #[test]
    fn test_toggle_theme_persists() {
        let mut c = controller();
        c.toggle_theme();
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(c.prefs().get(theme::PREF_KEY), Some("dark".to_string()));
        c.toggle_theme();
        assert_eq!(c.prefs().get(theme::PREF_KEY), Some("light".to_string()));
    }
}
