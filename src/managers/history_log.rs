//! History log for the URL builder.
//!
//! A bounded, most-recent-first list of configuration snapshots. Entries are
//! captured on a user-visible commit action (copy-to-clipboard), skipping
//! trivial or repeated configurations, and the list is truncated to
//! [`MAX_HISTORY_ENTRIES`].

use crate::types::url::{
    HistoryEntry, UrlConfiguration, DISPLAY_HISTORY_COUNT, MAX_HISTORY_ENTRIES,
};

/// Trait defining history log operations.
pub trait HistoryLogTrait {
    /// Captures a snapshot of the configuration and its rendered URL.
    /// Returns `true` when an entry was added.
    fn record(&mut self, configuration: &UrlConfiguration, generated_url: &str) -> bool;

    /// The full stored list, most-recent first.
    fn entries(&self) -> &[HistoryEntry];

    /// At most [`DISPLAY_HISTORY_COUNT`] entries for the UI's recent view.
    /// Does not mutate the stored list.
    fn recent(&self) -> &[HistoryEntry];

    /// Removes a single entry by id. Returns `true` when an entry was found.
    fn remove(&mut self, id: &str) -> bool;

    /// Removes all entries.
    fn clear(&mut self);
}

/// In-memory history log.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a log from previously persisted entries, enforcing the
    /// storage bound on oversized lists.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(MAX_HISTORY_ENTRIES);
        Self { entries }
    }
}

impl HistoryLogTrait for HistoryLog {
    fn record(&mut self, configuration: &UrlConfiguration, generated_url: &str) -> bool {
        // Blank configurations and empty renderings are not worth keeping.
        if configuration.is_trivial() || generated_url.trim().is_empty() {
            return false;
        }

        // Skip when nothing changed since the last capture.
        if let Some(latest) = self.entries.first() {
            if latest.configuration == *configuration {
                return false;
            }
        }

        let entry = HistoryEntry::capture(configuration.clone(), generated_url.to_string());
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        true
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn recent(&self) -> &[HistoryEntry] {
        let count = self.entries.len().min(DISPLAY_HISTORY_COUNT);
        &self.entries[..count]
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
