//! Unit tests for the BookmarkManager public API.
//!
//! These tests drive add / delete / record_visit / list through
//! `BookmarkManagerTrait` over an in-memory store, and check after every call
//! that the persisted blob matches the in-memory list.

use bookmarker::managers::bookmark_manager::{
    decode_list, BookmarkManager, BookmarkManagerTrait, DEFAULT_STORAGE_KEY,
};
use bookmarker::storage::{KeyValueStore, MemoryStore};
use bookmarker::types::bookmark::{Bookmark, InvalidField};
use bookmarker::types::errors::BookmarkError;
use chrono::{NaiveDate, NaiveDateTime};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, 5, 3)
        .unwrap()
}

fn setup() -> BookmarkManager<MemoryStore> {
    BookmarkManager::new(MemoryStore::new(), DEFAULT_STORAGE_KEY)
}

fn persisted(mgr: &BookmarkManager<MemoryStore>) -> Vec<Bookmark> {
    let blob = mgr
        .store()
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .expect("list should have been persisted");
    decode_list(&blob).unwrap()
}

fn names(mgr: &BookmarkManager<MemoryStore>) -> Vec<&str> {
    mgr.list_bookmarks().iter().map(|b| b.name.as_str()).collect()
}

/// Loading with nothing persisted yields an empty list and writes nothing.
#[test]
fn test_load_without_blob_is_empty() {
    let mut mgr = setup();
    assert!(mgr.load().is_empty());
    assert_eq!(mgr.store().write_count(), 0);
}

/// A blob that is not a bookmark list is discarded instead of failing.
#[test]
fn test_load_unparseable_blob_is_empty() {
    for blob in ["{oops", "42", r#"[{"name":"abc"}]"#, ""] {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_STORAGE_KEY, blob).unwrap();
        let mut mgr = BookmarkManager::new(store, DEFAULT_STORAGE_KEY);
        assert!(mgr.load().is_empty(), "blob {:?} should load as empty", blob);
    }
}

#[test]
fn test_add_appends_and_persists() {
    let mut mgr = setup();

    let added = mgr.add_bookmark("google", "google.com", at(17, 9)).unwrap().clone();
    assert_eq!(added.name, "google");
    assert_eq!(added.url, "google.com");
    assert_eq!(added.edit_date, "October 17th 2026, 9:05:03 am");
    assert_eq!(added.visit_date, "");

    mgr.add_bookmark("rust", "https://rust-lang.org", at(18, 21)).unwrap();
    assert_eq!(names(&mgr), ["google", "rust"]);
    assert_eq!(persisted(&mgr), mgr.list_bookmarks());
    assert_eq!(mgr.store().write_count(), 2);
}

/// Invalid name: nothing changes in memory or in the store.
#[test]
fn test_add_with_short_name_fails_without_side_effects() {
    let mut mgr = setup();
    let result = mgr.add_bookmark("ab", "google.com", at(17, 9));

    assert!(matches!(
        result,
        Err(BookmarkError::ValidationFailed { field: InvalidField::Name })
    ));
    assert!(mgr.is_empty());
    assert_eq!(mgr.store().write_count(), 0);
    assert_eq!(mgr.store().get(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_add_reports_which_field_failed() {
    let mut mgr = setup();
    assert!(matches!(
        mgr.add_bookmark("google", "google", at(17, 9)),
        Err(BookmarkError::ValidationFailed { field: InvalidField::Url })
    ));
    assert!(matches!(
        mgr.add_bookmark("g", "g", at(17, 9)),
        Err(BookmarkError::ValidationFailed { field: InvalidField::Both })
    ));
}

/// Deleting shifts later entries down, so the same index removes the next one.
#[test]
fn test_delete_shifts_indexes() {
    let mut mgr = setup();
    for name in ["aaa", "bbb", "ccc"] {
        mgr.add_bookmark(name, "example.com", at(17, 9)).unwrap();
    }

    let removed = mgr.remove_bookmark(1).unwrap();
    assert_eq!(removed.name, "bbb");
    assert_eq!(names(&mgr), ["aaa", "ccc"]);
    assert_eq!(persisted(&mgr), mgr.list_bookmarks());

    mgr.remove_bookmark(1).unwrap();
    assert_eq!(names(&mgr), ["aaa"]);
    assert_eq!(persisted(&mgr), mgr.list_bookmarks());
}

#[test]
fn test_delete_out_of_range_leaves_everything_untouched() {
    let mut mgr = setup();
    mgr.add_bookmark("aaa", "example.com", at(17, 9)).unwrap();
    mgr.add_bookmark("bbb", "example.com", at(17, 9)).unwrap();
    let writes = mgr.store().write_count();
    let before = persisted(&mgr);

    let result = mgr.remove_bookmark(5);
    assert!(matches!(result, Err(BookmarkError::OutOfRange { index: 5, len: 2 })));
    assert_eq!(names(&mgr), ["aaa", "bbb"]);
    assert_eq!(mgr.store().write_count(), writes);
    assert_eq!(persisted(&mgr), before);
}

#[test]
fn test_record_visit_changes_only_visit_date() {
    let mut mgr = setup();
    mgr.add_bookmark("google", "google.com", at(17, 9)).unwrap();
    mgr.add_bookmark("rust", "rust-lang.org", at(17, 10)).unwrap();
    let before = persisted(&mgr);

    let url = mgr.record_visit(0, at(20, 15)).unwrap();
    assert_eq!(url, "google.com");

    let after = persisted(&mgr);
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0].visit_date, "20/10/2026,15:05PM");
    assert_eq!(after[0].edit_date, before[0].edit_date);
    assert_eq!(after[0].name, before[0].name);
    assert_eq!(after[0].url, before[0].url);
    assert_eq!(after[1], before[1]);
    assert_eq!(after, mgr.list_bookmarks());
}

#[test]
fn test_record_visit_out_of_range() {
    let mut mgr = setup();
    assert!(matches!(
        mgr.record_visit(0, at(17, 9)),
        Err(BookmarkError::OutOfRange { index: 0, len: 0 })
    ));
    assert_eq!(mgr.store().write_count(), 0);
}

/// A second visit overwrites the first visit time.
#[test]
fn test_record_visit_overwrites_previous_visit() {
    let mut mgr = setup();
    mgr.add_bookmark("google", "google.com", at(17, 9)).unwrap();
    mgr.record_visit(0, at(18, 9)).unwrap();
    mgr.record_visit(0, at(19, 9)).unwrap();
    assert_eq!(mgr.get(0).unwrap().visit_date, "19/10/2026,09:05AM");
}

/// A manager reopened over the same store sees exactly what was persisted.
#[test]
fn test_reload_matches_memory() {
    let mut mgr = setup();
    mgr.add_bookmark("google", "google.com", at(17, 9)).unwrap();
    mgr.record_visit(0, at(18, 9)).unwrap();
    let expected = mgr.list_bookmarks().to_vec();

    assert_eq!(mgr.load(), expected.as_slice());
}

#[test]
fn test_custom_storage_key() {
    let mut mgr = BookmarkManager::new(MemoryStore::new(), "work");
    mgr.add_bookmark("jira", "jira.com", at(17, 9)).unwrap();
    assert_eq!(mgr.storage_key(), "work");
    assert!(mgr.store().get("work").unwrap().is_some());
    assert!(mgr.store().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}
