//! Property-based tests for bookmark list persistence.
//!
//! These tests verify that a bookmark list survives encoding to the stored
//! JSON blob, and that a manager reopened over the same store sees exactly
//! the list that was written.

use std::sync::Arc;

use bookmarker::database::Database;
use bookmarker::managers::bookmark_manager::{
    decode_list, encode_list, BookmarkManager, BookmarkManagerTrait, DEFAULT_STORAGE_KEY,
};
use bookmarker::services::timestamp::TimestampFormatter;
use bookmarker::storage::SqliteStore;
use bookmarker::types::bookmark::Bookmark;
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

/// Any text at all: the blob must carry quotes, unicode and empty strings unchanged.
fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (".{0,20}", ".{0,40}", ".{0,30}", ".{0,30}").prop_map(|(name, url, edit_date, visit_date)| {
        Bookmark {
            name,
            url,
            edit_date,
            visit_date,
        }
    })
}

fn arb_valid_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{3,12}"
}

fn arb_valid_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("http://"), Just("https://")],
        "[a-z0-9][a-z0-9-]{1,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".io"), Just(".co.uk")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}{}{}", scheme, host, tld))
}

fn arb_time() -> impl Strategy<Value = NaiveDateTime> {
    (1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(month, day, hour, minute)| {
        NaiveDate::from_ymd_opt(2026, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    })
}

// **Blob round-trip**
//
// *For any* list of bookmarks, encoding to the stored blob then decoding
// SHALL produce an equal list.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn blob_roundtrip(list in proptest::collection::vec(arb_bookmark(), 0..8)) {
        let blob = encode_list(&list).expect("encoding should succeed");
        let decoded = decode_list(&blob).expect("decoding our own blob should succeed");
        prop_assert_eq!(decoded, list);
    }
}

// **Persist then reload**
//
// *For any* sequence of valid additions and visits, a second manager opened
// over the same database SHALL load a list equal to the first manager's.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn persisted_list_reloads_identically(
        entries in proptest::collection::vec((arb_valid_name(), arb_valid_url(), arb_time()), 1..6),
        visit in proptest::option::of((any::<prop::sample::Index>(), arb_time())),
    ) {
        let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
        let mut writer = BookmarkManager::new(SqliteStore::new(Arc::clone(&db)), DEFAULT_STORAGE_KEY);

        for (name, url, at) in &entries {
            writer.add_bookmark(name, url, *at).expect("valid bookmark should be added");
        }
        if let Some((index, at)) = visit {
            writer.record_visit(index.index(entries.len()), at).expect("index is in range");
        }

        let reader = BookmarkManager::open(
            SqliteStore::new(Arc::clone(&db)),
            DEFAULT_STORAGE_KEY,
            TimestampFormatter::default(),
        );
        prop_assert_eq!(reader.list_bookmarks(), writer.list_bookmarks());
        prop_assert_eq!(reader.len(), entries.len());
    }
}
