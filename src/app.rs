//! App Core for Bookmarker.
//!
//! Central struct holding the settings engine and the bookmark manager, wired
//! to whichever key-value backend the settings select.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::bookmark_manager::BookmarkManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::timestamp::TimestampFormatter;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, SqliteStore};
use crate::types::settings::{AppSettings, StorageBackend};

/// File name of the SQLite database inside the data directory.
pub const DATABASE_FILE: &str = "bookmarker.db";

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmarks: BookmarkManager<Box<dyn KeyValueStore>>,
}

impl App {
    /// Creates the app from the settings file at `config_path` (platform default if `None`)
    /// and loads the persisted bookmark list.
    ///
    /// A malformed settings file is logged and replaced by defaults in memory.
    pub fn new(config_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            tracing::warn!(path = settings_engine.get_config_path(), error = %e, "Using default settings");
        }

        let data_dir = settings_engine.data_dir();
        let store = open_store(settings_engine.get_settings(), &data_dir)?;
        let bookmarks = open_manager(settings_engine.get_settings(), store);

        Ok(Self {
            settings_engine,
            bookmarks,
        })
    }

    /// Creates an app with default settings over an in-memory store. Nothing touches disk.
    pub fn in_memory(config_path: &str) -> Self {
        let settings_engine = SettingsEngine::new(Some(config_path.to_string()));
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let bookmarks = open_manager(settings_engine.get_settings(), store);
        Self {
            settings_engine,
            bookmarks,
        }
    }

    /// Re-reads the display patterns so later adds and visits use them.
    pub fn apply_display_settings(&mut self) {
        let formatter = TimestampFormatter::new(&self.settings_engine.get_settings().display);
        self.bookmarks.set_formatter(formatter);
        tracing::debug!("Applied display settings");
    }
}

fn open_manager(
    settings: &AppSettings,
    store: Box<dyn KeyValueStore>,
) -> BookmarkManager<Box<dyn KeyValueStore>> {
    let formatter = TimestampFormatter::new(&settings.display);
    BookmarkManager::open(store, &settings.storage.key, formatter)
}

/// Opens the backend selected in `settings`, creating `data_dir` if needed.
pub fn open_store(
    settings: &AppSettings,
    data_dir: &Path,
) -> Result<Box<dyn KeyValueStore>, Box<dyn std::error::Error>> {
    let store: Box<dyn KeyValueStore> = match settings.storage.backend {
        StorageBackend::Sqlite => {
            fs::create_dir_all(data_dir)?;
            let db = Database::open(data_dir.join(DATABASE_FILE))
                .map_err(|e| format!("Database init failed: {}", e))?;
            Box::new(SqliteStore::new(Arc::new(db)))
        }
        StorageBackend::File => Box::new(FileStore::new(data_dir)),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    tracing::info!(backend = ?settings.storage.backend, dir = %data_dir.display(), "Opened bookmark store");
    Ok(store)
}
