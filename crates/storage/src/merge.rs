//! Top-level field overlay used by load and import.

use learning_tracker_core::AppState;
use serde_json::{Map, Value};

/// Overlay `fields` onto `base` one top-level key at a time.
///
/// Keys present in `fields` replace the base value wholesale (nested objects
/// such as product links are not merged); keys only in `base` survive.
pub fn shallow_merge(base: &AppState, fields: Map<String, Value>) -> Result<AppState, serde_json::Error> {
    let mut merged = match serde_json::to_value(base)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(fields);
    serde_json::from_value(Value::Object(merged))
}
