//! Failure-tolerant persistence for URL builder state.
//!
//! Wraps a [`StorageBackend`] with swallow-all-failures semantics: a failed
//! write reports `false`, a failed or malformed read reads as absent. The
//! worst case is loss of persistence, never a crash — callers observe "no
//! saved state" and proceed with defaults.

use crate::storage::StorageBackend;
use crate::types::url::{HistoryEntry, UrlConfiguration, CURRENT_CONFIG_KEY, HISTORY_KEY};

/// Trait defining the persistence operations for URL builder state.
pub trait ConfigStoreTrait {
    /// Persists the current configuration. Returns `true` on success.
    fn save_configuration(&mut self, config: &UrlConfiguration) -> bool;

    /// Loads the saved configuration. Absence, read failure, and malformed
    /// stored text all read as `None`.
    fn load_configuration(&self) -> Option<UrlConfiguration>;

    /// Persists the full history list. Returns `true` on success.
    fn save_history(&mut self, entries: &[HistoryEntry]) -> bool;

    /// Loads the saved history list. Any failure or absence yields an empty
    /// list, never an error.
    fn load_history(&self) -> Vec<HistoryEntry>;
}

/// Config store over an injected storage backend.
pub struct ConfigStore<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> ConfigStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }
}

impl<S: StorageBackend> ConfigStoreTrait for ConfigStore<S> {
    fn save_configuration(&mut self, config: &UrlConfiguration) -> bool {
        let serialized = match serde_json::to_string(config) {
            Ok(json) => json,
            Err(_) => return false,
        };
        self.backend.set(CURRENT_CONFIG_KEY, &serialized).is_ok()
    }

    fn load_configuration(&self) -> Option<UrlConfiguration> {
        match self.backend.get(CURRENT_CONFIG_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).ok(),
            _ => None,
        }
    }

    fn save_history(&mut self, entries: &[HistoryEntry]) -> bool {
        let serialized = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(_) => return false,
        };
        self.backend.set(HISTORY_KEY, &serialized).is_ok()
    }

    fn load_history(&self) -> Vec<HistoryEntry> {
        match self.backend.get(HISTORY_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}
