use learning_tracker_core::AppState;
use serde_json::{json, Value};

use super::create_test_state;
use crate::{export_state, import_state, ImportError};

fn payload_without(key: &str) -> String {
    let mut value = serde_json::to_value(create_test_state()).unwrap();
    if let Value::Object(map) = &mut value {
        map.remove(key);
    }
    value.to_string()
}

#[test]
fn export_then_import_reproduces_state() {
    let state = create_test_state();
    let exported = export_state(&state).unwrap();
    assert!(exported.contains('\n'), "export should be pretty-printed");
    let imported = import_state(&exported, &state).unwrap();
    assert_eq!(imported, state);
}

#[test]
fn import_replaces_current_lists() {
    let current = AppState::initial();
    let imported = import_state(&export_state(&create_test_state()).unwrap(), &current).unwrap();
    assert_eq!(imported.products.len(), 1);
    assert_eq!(imported.streak, 2);
}

#[test]
fn import_rejects_non_json() {
    let err = import_state("hello", &AppState::initial()).unwrap_err();
    assert!(matches!(err, ImportError::Malformed(_)));
}

#[test]
fn import_rejects_non_object() {
    let err = import_state("[1, 2]", &AppState::initial()).unwrap_err();
    assert!(matches!(err, ImportError::NotAnObject));
}

#[test]
fn import_rejects_version_mismatch() {
    let raw = json!({"version": "2.0.0", "products": [], "skills": [], "media": [], "weeks": [], "shipLog": [], "streak": 0});
    let err = import_state(&raw.to_string(), &AppState::initial()).unwrap_err();
    match err {
        ImportError::VersionMismatch { expected, found } => {
            assert_eq!(expected, "1.0.0");
            assert_eq!(found.as_deref(), Some("2.0.0"));
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn import_rejects_missing_ship_log_and_leaves_state_alone() {
    let current = create_test_state();
    let before = current.clone();
    let err = import_state(&payload_without("shipLog"), &current).unwrap_err();
    assert!(matches!(err, ImportError::MissingField("shipLog")));
    assert_eq!(err.to_string(), "missing field: shipLog");
    assert_eq!(current, before);
}

#[test]
fn import_rejects_list_field_with_wrong_shape() {
    let raw = json!({"version": "1.0.0", "products": {}, "skills": [], "media": [], "weeks": [], "shipLog": [], "streak": 0});
    let err = import_state(&raw.to_string(), &AppState::initial()).unwrap_err();
    assert!(matches!(err, ImportError::MissingField("products")));
}

#[test]
fn import_requires_streak() {
    let err = import_state(&payload_without("streak"), &AppState::initial()).unwrap_err();
    assert!(matches!(err, ImportError::MissingField("streak")));
}

#[test]
fn import_rejects_entries_that_do_not_fit() {
    let raw = json!({"version": "1.0.0", "products": [{"id": "p"}], "skills": [], "media": [], "weeks": [], "shipLog": [], "streak": 0});
    let err = import_state(&raw.to_string(), &AppState::initial()).unwrap_err();
    assert!(matches!(err, ImportError::InvalidShape(_)));
}

#[test]
fn import_keeps_last_activity_from_current_when_absent() {
    let mut current = AppState::initial();
    current.last_activity_date = Some("2024-02-02".to_owned());
    let raw = json!({"version": "1.0.0", "products": [], "skills": [], "media": [], "weeks": [], "shipLog": [], "streak": 9});
    let imported = import_state(&raw.to_string(), &current).unwrap();
    assert_eq!(imported.streak, 9);
    assert_eq!(imported.last_activity_date.as_deref(), Some("2024-02-02"));
}
