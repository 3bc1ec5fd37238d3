use learning_tracker_core::constants::{REJECTED_KEY, STORAGE_KEY};
use learning_tracker_core::AppState;

use super::create_test_state;
use crate::{MemoryBlobStore, Storage};

#[test]
fn load_without_blob_returns_default() {
    let storage = Storage::new(MemoryBlobStore::new());
    assert_eq!(storage.load(AppState::initial()), AppState::initial());
}

#[test]
fn load_unparsable_blob_returns_default() {
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, "{not json"));
    assert_eq!(storage.load(AppState::initial()), AppState::initial());
}

#[test]
fn load_non_object_blob_returns_default() {
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, "null"));
    assert_eq!(storage.load(AppState::initial()), AppState::initial());
}

#[test]
fn load_discards_other_version() {
    let mut stored = create_test_state();
    stored.version = "0.9.0".to_owned();
    let blob = serde_json::to_string(&stored).unwrap();
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));
    assert_eq!(storage.load(AppState::initial()), AppState::initial());
}

#[test]
fn save_then_load_round_trips() {
    let storage = Storage::new(MemoryBlobStore::new());
    let state = create_test_state();
    storage.save(&state).unwrap();
    assert_eq!(storage.load(AppState::initial()), state);
}

#[test]
fn load_keeps_default_fields_missing_from_blob() {
    let blob = r#"{"version":"1.0.0","products":[],"skills":[],"media":[],"weeks":[],"shipLog":[]}"#;
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));
    let mut default = AppState::initial();
    default.streak = 4;
    default.last_activity_date = Some("2024-05-05".to_owned());
    let loaded = storage.load(default.clone());
    assert_eq!(loaded.streak, 4);
    assert_eq!(loaded.last_activity_date.as_deref(), Some("2024-05-05"));
}

#[test]
fn load_blob_with_bad_entries_returns_default() {
    let blob = r#"{"version":"1.0.0","skills":[{"nope":true}]}"#;
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));
    assert_eq!(storage.load(AppState::initial()), AppState::initial());
}

#[test]
fn save_overwrites_previous_blob() {
    let storage = Storage::new(MemoryBlobStore::new());
    storage.save(&create_test_state()).unwrap();
    storage.save(&AppState::initial()).unwrap();
    let raw = storage.store().get(STORAGE_KEY).unwrap();
    let reread: AppState = serde_json::from_str(&raw).unwrap();
    assert_eq!(reread, AppState::initial());
}

#[test]
fn reset_persists_default() {
    let storage = Storage::new(MemoryBlobStore::new());
    storage.save(&create_test_state()).unwrap();
    let state = storage.reset(AppState::initial()).unwrap();
    assert_eq!(state, AppState::initial());
    assert_eq!(storage.load(AppState::initial()), AppState::initial());

    // An absent lastActivityDate is not written, so the load default keeps its own.
    let loaded = storage.load(create_test_state());
    assert!(loaded.products.is_empty());
    assert_eq!(loaded.streak, 0);
    assert_eq!(loaded.last_activity_date, create_test_state().last_activity_date);
}

#[test]
fn load_rounds_fractional_counts() {
    let blob = r#"{"version":"1.0.0","skills":[{"id":"s-1","tier":1.0,"name":"SQL","done":false}],
        "media":[{"id":"media-1","date":"2024-01-02","type":"book","title":"DDIA",
        "timeSpentMinutes":12.5,"progressLabel":"p1","takeaways":["a","b","c"],
        "openQuestion":"","appliedAction":""}],"streak":2.0}"#;
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));
    let loaded = storage.load(AppState::initial());
    assert_eq!(loaded.media[0].time_spent_minutes, 13);
    assert_eq!(loaded.skills[0].tier, 1);
    assert_eq!(loaded.streak, 2);
    assert!(storage.store().get(REJECTED_KEY).is_none());
}

#[test]
fn rejected_blob_is_set_aside_before_next_save() {
    let blob = r#"{"version":"1.0.0","skills":[{"nope":true}]}"#;
    let storage = Storage::new(MemoryBlobStore::with_blob(STORAGE_KEY, blob));
    assert_eq!(storage.load(AppState::initial()), AppState::initial());
    storage.save(&AppState::initial()).unwrap();
    assert_eq!(storage.store().get(REJECTED_KEY).as_deref(), Some(blob));
}

#[test]
fn missing_blob_sets_nothing_aside() {
    let storage = Storage::new(MemoryBlobStore::new());
    storage.load(AppState::initial());
    assert!(storage.store().get(REJECTED_KEY).is_none());
}
