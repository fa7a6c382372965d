use std::fmt;

use super::bookmark::InvalidField;

// === StorageError ===

/// Errors related to the persistent key-value store.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing the store.
    Io(String),
    /// Database operation failed.
    Database(String),
    /// Failed to serialize the bookmark list.
    Serialization(String),
    /// The persisted blob could not be parsed.
    Deserialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            StorageError::Deserialization(msg) => {
                write!(f, "Storage deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

// === BookmarkError ===

/// Errors related to bookmark management operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// The name, the URL, or both failed validation.
    ValidationFailed { field: InvalidField },
    /// The index does not address an existing bookmark.
    OutOfRange { index: usize, len: usize },
    /// Persisting the list failed; the in-memory list was left unchanged.
    Storage(StorageError),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::ValidationFailed { field } => {
                let field = match field {
                    InvalidField::Name => "name",
                    InvalidField::Url => "url",
                    InvalidField::Both => "name and url",
                };
                write!(f, "Bookmark validation failed: invalid {}", field)
            }
            BookmarkError::OutOfRange { index, len } => {
                write!(f, "Bookmark index out of range: {} (length {})", index, len)
            }
            BookmarkError::Storage(e) => write!(f, "Bookmark storage error: {}", e),
        }
    }
}

impl std::error::Error for BookmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookmarkError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for BookmarkError {
    fn from(e: StorageError) -> Self {
        BookmarkError::Storage(e)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
