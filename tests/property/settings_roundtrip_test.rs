//! Property-based tests for AppSettings serialization round-trip.
//!
//! These tests verify that AppSettings can be serialized to JSON and
//! deserialized back without data loss, and that any pattern the user puts
//! in the display settings still yields a timestamp.

use bookmarker::services::timestamp::TimestampFormatter;
use bookmarker::types::settings::{AppSettings, DisplaySettings, StorageBackend, StorageSettings};
use chrono::NaiveDate;
use proptest::prelude::*;

fn arb_backend() -> impl Strategy<Value = StorageBackend> {
    prop_oneof![
        Just(StorageBackend::Sqlite),
        Just(StorageBackend::File),
        Just(StorageBackend::Memory),
    ]
}

fn arb_storage_settings() -> impl Strategy<Value = StorageSettings> {
    (
        arb_backend(),
        "[a-z][a-z0-9_-]{0,15}",
        proptest::option::of("/[a-zA-Z0-9/._-]{1,40}"),
    )
        .prop_map(|(backend, key, data_dir)| StorageSettings {
            backend,
            key,
            data_dir,
        })
}

fn arb_display_settings() -> impl Strategy<Value = DisplaySettings> {
    (".{0,30}", ".{0,30}").prop_map(|(edit_date_format, visit_date_format)| DisplaySettings {
        edit_date_format,
        visit_date_format,
    })
}

fn arb_app_settings() -> impl Strategy<Value = AppSettings> {
    (arb_storage_settings(), arb_display_settings())
        .prop_map(|(storage, display)| AppSettings { storage, display })
}

// **Settings serialization round-trip**
//
// *For any* valid `AppSettings` struct, serializing to JSON then
// deserializing SHALL produce an equivalent struct.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn settings_serialization_roundtrip(settings in arb_app_settings()) {
        let json = serde_json::to_string(&settings)
            .expect("Serialization to JSON should succeed for any valid AppSettings");

        let deserialized: AppSettings = serde_json::from_str(&json)
            .expect("Deserialization from JSON should succeed for valid JSON");

        prop_assert_eq!(
            deserialized,
            settings,
            "Deserialized AppSettings must equal the original"
        );
    }

    /// Broken strftime patterns fall back instead of panicking.
    #[test]
    fn any_display_pattern_formats(display in arb_display_settings()) {
        let formatter = TimestampFormatter::new(&display);
        let at = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        let _ = formatter.edit_date(at);
        let _ = formatter.visit_date(at);
    }
}
