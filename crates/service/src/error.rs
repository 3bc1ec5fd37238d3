//! Typed error enum for the service layer.
//!
//! Unifies storage and import failures with boundary validation into a single
//! error type, so the shell can tell "bad input" apart from "disk trouble".

use learning_tracker_core::TrackerError;
use learning_tracker_storage::{ImportError, StorageError};
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reading or writing persisted data failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// A backup file was rejected.
    #[error("import: {0}")]
    Import(#[from] ImportError),

    /// A value typed by the user could not be parsed.
    #[error(transparent)]
    Parse(#[from] TrackerError),

    /// An edit named an entry that does not exist.
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },

    /// A draft failed boundary validation (blank name, no links, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error came from user-supplied data rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Import(_) | Self::Parse(_) | Self::NotFound { .. } | Self::InvalidInput(_)
        )
    }
}
