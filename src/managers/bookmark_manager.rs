//! Bookmark Manager for Bookmarker.
//!
//! Implements `BookmarkManagerTrait`: owns the ordered bookmark list and keeps
//! it mirrored into a single key-value slot. Every successful mutation
//! re-serializes the whole list; a mutation whose write fails is undone so
//! memory and storage never drift apart.

use chrono::NaiveDateTime;

use crate::services::timestamp::TimestampFormatter;
use crate::services::validator;
use crate::storage::KeyValueStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{BookmarkError, StorageError};

/// Default key of the slot holding the serialized list.
pub const DEFAULT_STORAGE_KEY: &str = "bookmarks";

/// Trait defining bookmark management operations.
///
/// Bookmarks are addressed by index. Indexes are only meaningful against the
/// list as it was last rendered, since deleting shifts later entries down.
pub trait BookmarkManagerTrait {
    fn load(&mut self) -> &[Bookmark];
    fn add_bookmark(&mut self, name: &str, url: &str, now: NaiveDateTime) -> Result<&Bookmark, BookmarkError>;
    fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark, BookmarkError>;
    /// Stamps the visit time and returns the URL to open.
    fn record_visit(&mut self, index: usize, now: NaiveDateTime) -> Result<String, BookmarkError>;
    fn list_bookmarks(&self) -> &[Bookmark];
}

/// Serializes a bookmark list into the persisted blob format.
pub fn encode_list(bookmarks: &[Bookmark]) -> Result<String, StorageError> {
    serde_json::to_string(bookmarks).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parses a persisted blob back into a bookmark list.
pub fn decode_list(blob: &str) -> Result<Vec<Bookmark>, StorageError> {
    serde_json::from_str(blob).map_err(|e| StorageError::Deserialization(e.to_string()))
}

/// Bookmark manager mirroring its list into a `KeyValueStore`.
pub struct BookmarkManager<S: KeyValueStore> {
    store: S,
    key: String,
    bookmarks: Vec<Bookmark>,
    formatter: TimestampFormatter,
}

impl<S: KeyValueStore> BookmarkManager<S> {
    /// Creates a manager with an empty list. Call `load` to read the persisted copy.
    pub fn new(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            bookmarks: Vec::new(),
            formatter: TimestampFormatter::default(),
        }
    }

    /// Creates a manager and immediately loads the persisted list.
    pub fn open(store: S, key: &str, formatter: TimestampFormatter) -> Self {
        let mut manager = Self::new(store, key).with_formatter(formatter);
        manager.load();
        manager
    }

    pub fn with_formatter(mut self, formatter: TimestampFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Swaps the timestamp patterns used for later adds and visits.
    /// Stamps already stored are left as they are.
    pub fn set_formatter(&mut self, formatter: TimestampFormatter) {
        self.formatter = formatter;
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Writes the full list to the store, replacing the previous blob.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let blob = encode_list(&self.bookmarks)?;
        self.store.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = self.bookmarks.len(), "Persisted bookmark list");
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), BookmarkError> {
        if index >= self.bookmarks.len() {
            return Err(BookmarkError::OutOfRange {
                index,
                len: self.bookmarks.len(),
            });
        }
        Ok(())
    }
}

impl<S: KeyValueStore> BookmarkManagerTrait for BookmarkManager<S> {
    /// Reads the persisted list, replacing whatever is in memory.
    ///
    /// A missing slot yields an empty list. An unreadable store or a blob that
    /// fails to parse is logged and also yields an empty list.
    fn load(&mut self) -> &[Bookmark] {
        self.bookmarks = match self.store.get(&self.key) {
            Ok(None) => Vec::new(),
            Ok(Some(blob)) => match decode_list(&blob) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "Discarding unreadable bookmark list");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read bookmark list");
                Vec::new()
            }
        };
        tracing::info!(key = %self.key, count = self.bookmarks.len(), "Loaded bookmarks");
        &self.bookmarks
    }

    /// Validates and appends a never-visited bookmark stamped with `now`.
    fn add_bookmark(&mut self, name: &str, url: &str, now: NaiveDateTime) -> Result<&Bookmark, BookmarkError> {
        validator::validate(name, url).map_err(|field| BookmarkError::ValidationFailed { field })?;

        let bookmark = Bookmark::new(name, url, self.formatter.edit_date(now));
        self.bookmarks.push(bookmark);
        if let Err(e) = self.save() {
            self.bookmarks.pop();
            return Err(e.into());
        }

        let index = self.bookmarks.len() - 1;
        Ok(&self.bookmarks[index])
    }

    /// Removes the bookmark at `index`, shifting later entries down by one.
    fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark, BookmarkError> {
        self.check_index(index)?;

        let removed = self.bookmarks.remove(index);
        if let Err(e) = self.save() {
            self.bookmarks.insert(index, removed);
            return Err(e.into());
        }
        Ok(removed)
    }

    fn record_visit(&mut self, index: usize, now: NaiveDateTime) -> Result<String, BookmarkError> {
        self.check_index(index)?;

        let visit_date = self.formatter.visit_date(now);
        let previous = std::mem::replace(&mut self.bookmarks[index].visit_date, visit_date);
        if let Err(e) = self.save() {
            self.bookmarks[index].visit_date = previous;
            return Err(e.into());
        }
        Ok(self.bookmarks[index].url.clone())
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }
}
