//! Confirm-then-mutate flow tying the bookmark manager to a confirmation layer.
//!
//! Add validates before prompting so an invalid form never reaches the
//! confirmation dialog. Delete prompts first and only then checks the index.
//! A declined or dismissed prompt leaves the list and the store untouched.

use chrono::NaiveDateTime;

use super::confirm::{Confirmation, ADD_PROMPT, DELETE_PROMPT};
use super::table::{added_message, failure_message, visit_target, DELETED_MESSAGE};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::services::validator;
use crate::storage::KeyValueStore;
use crate::types::errors::BookmarkError;

/// Result of a user-initiated operation, ready for the notification layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation happened; carries the success message.
    Done(String),
    /// The user declined or dismissed the prompt.
    Cancelled,
    /// The operation was rejected; carries the failure message.
    Failed(String),
}

impl Outcome {
    fn from_error(err: &BookmarkError) -> Self {
        Outcome::Failed(failure_message(err))
    }
}

/// A successful visit: the stored URL and the address to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub url: String,
    pub open_url: String,
}

pub struct BookmarkFlow<'a, S: KeyValueStore, C: Confirmation> {
    manager: &'a mut BookmarkManager<S>,
    confirmation: C,
}

impl<'a, S: KeyValueStore, C: Confirmation> BookmarkFlow<'a, S, C> {
    pub fn new(manager: &'a mut BookmarkManager<S>, confirmation: C) -> Self {
        Self { manager, confirmation }
    }

    /// Validates the form, asks for confirmation, then adds the bookmark.
    pub fn submit(&mut self, name: &str, url: &str, now: NaiveDateTime) -> Outcome {
        if let Err(field) = validator::validate(name, url) {
            return Outcome::from_error(&BookmarkError::ValidationFailed { field });
        }

        if !self.confirmation.request_confirmation(&ADD_PROMPT).is_confirmed() {
            tracing::debug!(site = name, "Add cancelled");
            return Outcome::Cancelled;
        }

        match self.manager.add_bookmark(name, url, now) {
            Ok(bookmark) => Outcome::Done(added_message(&bookmark.name)),
            Err(e) => Outcome::from_error(&e),
        }
    }

    /// Asks for confirmation, then deletes the bookmark at `index`.
    pub fn remove(&mut self, index: usize) -> Outcome {
        if !self.confirmation.request_confirmation(&DELETE_PROMPT).is_confirmed() {
            tracing::debug!(index, "Delete cancelled");
            return Outcome::Cancelled;
        }

        match self.manager.remove_bookmark(index) {
            Ok(_) => Outcome::Done(DELETED_MESSAGE.to_string()),
            Err(e) => Outcome::from_error(&e),
        }
    }

    /// Stamps the visit and returns the address to open. No confirmation is asked.
    pub fn visit(&mut self, index: usize, now: NaiveDateTime) -> Result<Visit, String> {
        self.manager
            .record_visit(index, now)
            .map(|url| Visit {
                open_url: visit_target(&url),
                url,
            })
            .map_err(|e| failure_message(&e))
    }
}
