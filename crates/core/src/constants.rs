//! Shared constants for learning-tracker.

/// Schema version stamped on every state. Loaded or imported blobs with any
/// other version are rejected wholesale.
pub const STATE_VERSION: &str = "1.0.0";

/// Key under which the whole state blob is stored.
pub const STORAGE_KEY: &str = "learning_tracker_v1";

/// Key under which a stored blob that could not be loaded is set aside, so
/// the next save does not destroy it.
pub const REJECTED_KEY: &str = "learning_tracker_v1.rejected";

/// Default file name for exported backups.
pub const EXPORT_FILE_NAME: &str = "learning-tracker-backup.json";

/// Returned by `most_recent_ship_date` when the ship log is empty.
pub const NO_SHIP_DATE: &str = "N/A";

/// Number of ship entries listed on the dashboard when not configured.
pub const DEFAULT_RECENT_SHIPS: usize = 5;

/// Length of the random suffix appended to generated ids.
pub const ID_SUFFIX_LEN: usize = 6;

/// Top-level list fields an import payload must carry.
pub const REQUIRED_LIST_FIELDS: [&str; 5] = ["products", "skills", "media", "weeks", "shipLog"];
