use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Bookmarks carry no stable ID; a bookmark is addressed by its position in the
/// list, and positions shift down when an earlier entry is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    /// Human-readable time the bookmark was created or last edited.
    pub edit_date: String,
    /// Human-readable time of the last visit, empty if never visited.
    #[serde(default)]
    pub visit_date: String,
}

impl Bookmark {
    /// Creates a never-visited bookmark.
    pub fn new(name: &str, url: &str, edit_date: String) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            edit_date,
            visit_date: String::new(),
        }
    }
}

/// Which input field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidField {
    Name,
    Url,
    Both,
}
