//! Test doubles for the rendering surface and preference store
//!
//! These let the full input-to-display path run headless: the mock surface
//! records every projected frame for later assertions, and the memory store
//! stands in for the persistent preference file.

use std::collections::HashMap;

use super::{DisplayFrame, PreferenceStore, RenderSink};

/// A render sink that records every frame it receives
#[derive(Debug, Default)]
pub struct MockSurface {
    frames: Vec<DisplayFrame>,
}

impl MockSurface {
    /// Creates an empty mock surface
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every frame rendered so far, oldest first
    #[must_use]
    pub fn frames(&self) -> &[DisplayFrame] {
        &self.frames
    }

    /// Returns the most recently rendered frame
    #[must_use]
    pub fn last(&self) -> Option<&DisplayFrame> {
        self.frames.last()
    }

    /// Forgets all recorded frames
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl RenderSink for MockSurface {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frames.push(frame.clone());
    }
}

/// An in-memory preference store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::super::flash::FlashStyle;
    use super::*;

    #[test]
    fn test_mock_surface_records_frames() {
        let mut surface = MockSurface::new();
        let frame = DisplayFrame {
            current: "42".to_string(),
            previous: String::new(),
            style: FlashStyle::Normal,
        };
        surface.render(&frame);
        assert_eq!(surface.frames().len(), 1);
        assert_eq!(surface.last(), Some(&frame));
    }

    #[test]
    fn test_mock_surface_clear() {
        let mut surface = MockSurface::new();
        surface.render(&DisplayFrame::default());
        surface.clear();
        assert!(surface.frames().is_empty());
        assert_eq!(surface.last(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark");
        assert_eq!(store.get("theme"), Some("dark".to_string()));
        store.set("theme", "light");
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }
}
