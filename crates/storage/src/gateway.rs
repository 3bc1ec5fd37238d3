//! Load, save, export and import of the whole tracker state.

use std::fs;
use std::path::Path;

use learning_tracker_core::constants::{REJECTED_KEY, REQUIRED_LIST_FIELDS, STORAGE_KEY};
use learning_tracker_core::AppState;
use serde_json::Value;

use crate::blob::BlobStore;
use crate::error::{ImportError, StorageError};
use crate::merge::shallow_merge;

/// Persistence gateway over a [`BlobStore`].
#[derive(Debug, Clone)]
pub struct Storage<S> {
    store: S,
}

impl<S: BlobStore> Storage<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored state, falling back to `default` on any problem.
    ///
    /// A missing, unreadable or unparsable blob, or one stamped with a
    /// different version, yields `default` unchanged. Problems are logged and
    /// never surfaced; a blob that was present but unusable is copied to
    /// [`REJECTED_KEY`] first. Otherwise the blob is shallow-merged over
    /// `default`.
    pub fn load(&self, default: AppState) -> AppState {
        let raw = match self.store.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stored state");
                return default;
            },
        };

        let fields = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => {
                tracing::warn!("stored state is not a JSON object, using default");
                self.set_aside(&raw);
                return default;
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse stored state, using default");
                self.set_aside(&raw);
                return default;
            },
        };

        let stored_version = fields.get("version").and_then(Value::as_str);
        if stored_version != Some(default.version.as_str()) {
            tracing::warn!(
                expected = %default.version,
                found = stored_version.unwrap_or("none"),
                "stored state version mismatch, discarding"
            );
            self.set_aside(&raw);
            return default;
        }

        match shallow_merge(&default, fields) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "stored state does not fit the model, using default");
                self.set_aside(&raw);
                default
            },
        }
    }

    fn set_aside(&self, raw: &str) {
        match self.store.write(REJECTED_KEY, raw) {
            Ok(()) => tracing::warn!(key = REJECTED_KEY, "kept rejected state blob"),
            Err(e) => tracing::error!(error = %e, "failed to keep rejected state blob"),
        }
    }

    /// Overwrite the stored blob with the full state.
    ///
    /// # Errors
    /// Returns error if serialization or the underlying write fails.
    pub fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let raw = serde_json::to_string(state)?;
        self.store.write(STORAGE_KEY, &raw)
    }

    /// Persist `default` and hand it back.
    ///
    /// # Errors
    /// Returns error if the write fails.
    pub fn reset(&self, default: AppState) -> Result<AppState, StorageError> {
        self.save(&default)?;
        Ok(default)
    }
}

/// Pretty-printed JSON of the full state.
///
/// # Errors
/// Returns error if serialization fails.
pub fn export_state(state: &AppState) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Write [`export_state`] output to `path`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn export_to_file(state: &AppState, path: &Path) -> Result<(), StorageError> {
    let raw = export_state(state)?;
    fs::write(path, raw).map_err(|e| StorageError::io(path.display().to_string(), e))
}

/// Validate a backup and merge it over `current`.
///
/// Checks, in order: the text is JSON, it is an object, its `version` equals
/// `current.version`, every list field is present and list-shaped, and
/// `streak` is present. Only then is the payload merged; `current` itself is
/// never modified.
///
/// # Errors
/// Returns an [`ImportError`] naming the first failed check.
pub fn import_state(raw: &str, current: &AppState) -> Result<AppState, ImportError> {
    let parsed: Value = serde_json::from_str(raw).map_err(ImportError::Malformed)?;
    let Value::Object(fields) = parsed else {
        return Err(ImportError::NotAnObject);
    };

    let found = fields.get("version").and_then(Value::as_str);
    if found != Some(current.version.as_str()) {
        return Err(ImportError::VersionMismatch {
            expected: current.version.clone(),
            found: found.map(str::to_owned),
        });
    }

    for key in REQUIRED_LIST_FIELDS {
        if !fields.get(key).is_some_and(Value::is_array) {
            return Err(ImportError::MissingField(key));
        }
    }
    if !fields.contains_key("streak") {
        return Err(ImportError::MissingField("streak"));
    }

    shallow_merge(current, fields).map_err(ImportError::InvalidShape)
}
