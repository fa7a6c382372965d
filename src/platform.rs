// Bookmarker platform paths
// Config: <platform config dir>/bookmarker
// Data:   $BOOKMARKER_DATA_DIR, or <platform data dir>/bookmarker

use std::env;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "bookmarker";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "BOOKMARKER_DATA_DIR";

/// Returns the configuration directory, falling back to the temp dir when the
/// platform has none.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Returns the data directory holding the bookmark store.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var(DATA_DIR_ENV).ok())
}

/// Resolves the data directory from an optional `BOOKMARKER_DATA_DIR` value.
/// An empty value counts as unset.
pub fn data_dir_from(env_override: Option<String>) -> PathBuf {
    match env_override {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::data_dir()
            .unwrap_or_else(env::temp_dir)
            .join(APP_DIR_NAME),
    }
}
