//! Transient error/success display states
//!
//! A flash is a presentational overlay with a fixed lifetime: errors show
//! for two seconds, success highlights for half a second. The controller
//! owns at most one flash at a time; every new user action replaces or
//! clears it, so a stale revert can never overwrite a newer display. The
//! event loop polls [`Flash::is_expired`] instead of arming bare timers.

use std::time::{Duration, Instant};

use crate::core::CalcError;

/// How long an error message stays on screen
pub const ERROR_CLEAR: Duration = Duration::from_millis(2000);

/// How long the success highlight stays on screen
pub const SUCCESS_CLEAR: Duration = Duration::from_millis(500);

/// What kind of flash is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashKind {
    /// An error message replaces the current-value line
    Error(CalcError),
    /// The current-value line is highlighted after a computation
    Success,
}

/// Styling hint carried on every display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashStyle {
    /// No transient styling
    #[default]
    Normal,
    /// Error styling
    Error,
    /// Success styling
    Success,
}

/// An active transient display state with its revert deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    kind: FlashKind,
    expires_at: Instant,
}

impl Flash {
    /// Creates an error flash starting at `now`
    #[must_use]
    pub fn error(err: CalcError, now: Instant) -> Self {
        Self {
            kind: FlashKind::Error(err),
            expires_at: now + ERROR_CLEAR,
        }
    }

    /// Creates a success flash starting at `now`
    #[must_use]
    pub fn success(now: Instant) -> Self {
        Self {
            kind: FlashKind::Success,
            expires_at: now + SUCCESS_CLEAR,
        }
    }

    /// Returns the flash kind
    #[must_use]
    pub fn kind(&self) -> &FlashKind {
        &self.kind
    }

    /// Returns the styling hint for display frames
    #[must_use]
    pub fn style(&self) -> FlashStyle {
        match self.kind {
            FlashKind::Error(_) => FlashStyle::Error,
            FlashKind::Success => FlashStyle::Success,
        }
    }

    /// Returns when the flash should revert
    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Returns true once the revert deadline has passed
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
