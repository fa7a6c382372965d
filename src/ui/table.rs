//! Table rows and user-facing messages for the bookmark list.

use serde::Serialize;

use crate::types::bookmark::{Bookmark, InvalidField};
use crate::types::errors::BookmarkError;

/// One rendered row of the bookmark table.
///
/// `index` is what visit/delete actions must send back; `position` is the
/// 1-based number shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRow {
    pub index: usize,
    pub position: usize,
    pub name: String,
    pub url: String,
    pub edit_date: String,
    pub visit_date: String,
}

pub fn rows(bookmarks: &[Bookmark]) -> Vec<BookmarkRow> {
    bookmarks
        .iter()
        .enumerate()
        .map(|(index, b)| BookmarkRow {
            index,
            position: index + 1,
            name: b.name.clone(),
            url: b.url.clone(),
            edit_date: b.edit_date.clone(),
            visit_date: b.visit_date.clone(),
        })
        .collect()
}

/// Address a visit action opens. The scheme is always `https://`, even when
/// the stored URL already carries one.
pub fn visit_target(url: &str) -> String {
    format!("https://{}", url)
}

/// Renders the list as a plain-text table. Names are shown upper-cased.
pub fn render_table(bookmarks: &[Bookmark]) -> String {
    const HEADERS: [&str; 5] = ["#", "Name", "URL", "Edited", "Visited"];

    let cells: Vec<[String; 5]> = rows(bookmarks)
        .into_iter()
        .map(|r| {
            [
                r.position.to_string(),
                r.name.to_uppercase(),
                r.url,
                r.edit_date,
                r.visit_date,
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cols: [&str; 5]| -> String {
        let padded: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{:<w$}", c, w = w))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(HEADERS));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in &cells {
        out.push_str(&line([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
        out.push('\n');
    }
    out
}

pub fn added_message(name: &str) -> String {
    format!("{} added successfully", name)
}

pub const DELETED_MESSAGE: &str = "Bookmark deleted successfully";

/// Message shown when an operation fails.
pub fn failure_message(err: &BookmarkError) -> String {
    match err {
        BookmarkError::ValidationFailed { field } => match field {
            InvalidField::Both => "Please enter a valid site name and URL.".to_string(),
            InvalidField::Name => {
                "Please enter a valid site name containing at least 3 characters.".to_string()
            }
            InvalidField::Url => "Please enter a valid URL. Example: https://google.com".to_string(),
        },
        BookmarkError::OutOfRange { .. } => {
            "That bookmark no longer exists. Please refresh the list.".to_string()
        }
        BookmarkError::Storage(_) => {
            "Your bookmarks could not be saved. Please try again.".to_string()
        }
    }
}
