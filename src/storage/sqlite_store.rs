//! Key-value store backed by the `kv_store` table of the SQLite database.

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use super::KeyValueStore;
use crate::database::connection::Database;
use crate::types::errors::StorageError;

/// SQLite-backed store. Each key is a single row, replaced wholesale on write.
pub struct SqliteStore {
    db: Arc<Database>,
}

impl SqliteStore {
    /// Creates a store over an already-migrated database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = chrono::Utc::now().timestamp();
        self.db.connection().execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}
