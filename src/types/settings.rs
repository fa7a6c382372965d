use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Where and under which key the bookmark list is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Key of the key-value slot holding the serialized list.
    pub key: String,
    /// Overrides the platform data directory when set.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            key: "bookmarks".to_string(),
            data_dir: None,
        }
    }
}

/// Key-value backend selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    File,
    Memory,
}

/// Timestamp formats used when stamping bookmarks.
///
/// Patterns are `chrono` strftime strings; `{ordinal}` expands to the day of
/// the month with an English ordinal suffix ("1st", "22nd").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    pub edit_date_format: String,
    pub visit_date_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            edit_date_format: "%B {ordinal} %Y, %-I:%M:%S %P".to_string(),
            visit_date_format: "%-d/%-m/%Y,%H:%M%p".to_string(),
        }
    }
}
