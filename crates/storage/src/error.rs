//! Typed errors for the persistence layer.
//!
//! `StorageError` covers reading and writing the blob; `ImportError` covers
//! validation of a user-supplied backup, which is reported to the user.

use thiserror::Error;

/// Failure to read or write the stored blob.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure while touching the blob.
    #[error("io error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// State could not be serialized or deserialized.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

/// Reasons a backup file is rejected. The caller's state is never modified
/// when one of these is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Text is not JSON at all.
    #[error("invalid file: {0}")]
    Malformed(#[source] serde_json::Error),

    /// JSON, but not an object.
    #[error("invalid file: expected a JSON object")]
    NotAnObject,

    #[error("version mismatch: expected {expected}, found {}", found.as_deref().unwrap_or("none"))]
    VersionMismatch { expected: String, found: Option<String> },

    /// A required top-level field is absent or not list-shaped.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Required fields are present but their entries do not fit the model.
    #[error("invalid entry shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}
