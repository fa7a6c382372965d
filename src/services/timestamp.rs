// Bookmarker timestamp formatting
// Turns a local wall-clock time into the human-readable strings stored on bookmarks.

use std::fmt::Write;

use chrono::{Datelike, NaiveDateTime};

use crate::types::settings::DisplaySettings;

/// Used when a configured pattern is not valid strftime.
const FALLBACK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats edit and visit timestamps according to the display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampFormatter {
    edit_format: String,
    visit_format: String,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::new(&DisplaySettings::default())
    }
}

impl TimestampFormatter {
    pub fn new(display: &DisplaySettings) -> Self {
        Self {
            edit_format: display.edit_date_format.clone(),
            visit_format: display.visit_date_format.clone(),
        }
    }

    /// Formats the time a bookmark was created or edited,
    /// e.g. `October 17th 2026, 9:05:03 am`.
    pub fn edit_date(&self, now: NaiveDateTime) -> String {
        format_timestamp(now, &self.edit_format)
    }

    /// Formats the time a bookmark was visited, e.g. `17/10/2026,09:05AM`.
    pub fn visit_date(&self, now: NaiveDateTime) -> String {
        format_timestamp(now, &self.visit_format)
    }
}

/// Returns the English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats `now` with a strftime pattern, expanding `{ordinal}` first.
pub fn format_timestamp(now: NaiveDateTime, pattern: &str) -> String {
    let day = now.day();
    let pattern = pattern.replace("{ordinal}", &format!("{}{}", day, ordinal_suffix(day)));

    let mut out = String::new();
    if write!(out, "{}", now.format(&pattern)).is_ok() {
        return out;
    }

    tracing::warn!(pattern = %pattern, "Invalid timestamp pattern, using fallback");
    now.format(FALLBACK_FORMAT).to_string()
}
