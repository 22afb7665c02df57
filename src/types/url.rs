use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Storage key for the current URL builder configuration.
pub const CURRENT_CONFIG_KEY: &str = "url-builder-current";

/// Storage key for the URL builder history list.
pub const HISTORY_KEY: &str = "url-builder-history";

/// Maximum number of history entries kept in storage.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Number of history entries shown in the "recent" view.
pub const DISPLAY_HISTORY_COUNT: usize = 3;

/// A single query parameter. Duplicate names are legal and kept in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl QueryParameter {
    /// Creates a blank parameter with a fresh opaque id, as the UI does on
    /// an "add parameter" action.
    pub fn new() -> Self {
        Self {
            id: new_token(),
            name: String::new(),
            value: String::new(),
        }
    }

    /// Creates a parameter with the given name and value.
    pub fn with_values(name: &str, value: &str) -> Self {
        Self {
            id: new_token(),
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl Default for QueryParameter {
    fn default() -> Self {
        Self::new()
    }
}

/// A base URL paired with its ordered query parameters.
///
/// Parameter order is significant: it determines query-string emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfiguration {
    pub base_url: String,
    pub parameters: Vec<QueryParameter>,
}

impl UrlConfiguration {
    pub fn new(base_url: &str, parameters: Vec<QueryParameter>) -> Self {
        Self {
            base_url: base_url.to_string(),
            parameters,
        }
    }

    /// A configuration with a blank base URL and no parameters. Trivial
    /// configurations are never captured into history.
    pub fn is_trivial(&self) -> bool {
        self.base_url.trim().is_empty() && self.parameters.is_empty()
    }
}

/// An immutable snapshot of a past configuration and its rendered URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub configuration: UrlConfiguration,
    /// Capture time, milliseconds since the UNIX epoch.
    pub timestamp: i64,
    /// The rendered URL at capture time, cached for display.
    pub generated_url: String,
}

impl HistoryEntry {
    /// Captures a snapshot of the given configuration. The configuration is
    /// owned by the entry and never aliases the live editable one.
    pub fn capture(configuration: UrlConfiguration, generated_url: String) -> Self {
        Self {
            id: new_token(),
            configuration,
            timestamp: now_millis(),
            generated_url,
        }
    }
}

/// Opaque unique token derived from the current time and a random component.
fn new_token() -> String {
    format!("{}-{}", now_millis(), Uuid::new_v4().simple())
}

/// Current UNIX timestamp in milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
