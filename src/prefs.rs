//! File-backed preference store
//!
//! A small JSON object on disk, read once at startup and rewritten on every
//! `set`. Persistence is best effort: a missing or malformed file opens as
//! an empty store, and a failed write is logged and otherwise ignored so a
//! read-only filesystem never breaks the calculator.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::surface::PreferenceStore;

/// Preference store persisted as a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Opens the store at the given path, loading existing values
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// Returns the backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "could not serialize preferences");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!(%err, path = %self.path.display(), "could not write preferences");
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}
