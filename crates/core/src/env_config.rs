//! Environment variable parsing with warn-level logging for invalid values.

use std::path::PathBuf;

use crate::constants::DEFAULT_RECENT_SHIPS;

/// Directory holding the state blob.
pub const DATA_DIR_ENV: &str = "LEARNING_TRACKER_DATA_DIR";
/// Mount path of the application shell.
pub const BASE_PATH_ENV: &str = "LEARNING_TRACKER_BASE";
/// Number of ship entries shown on the dashboard.
pub const RECENT_SHIPS_ENV: &str = "LEARNING_TRACKER_RECENT_SHIPS";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_or_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub base_path: String,
    pub recent_ships: usize,
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(default_data_dir, PathBuf::from);
        let base_path = std::env::var(BASE_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "/".to_owned());
        Self {
            data_dir,
            base_path,
            recent_ships: env_parse_with_default(RECENT_SHIPS_ENV, DEFAULT_RECENT_SHIPS),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            base_path: "/".to_owned(),
            recent_ships: DEFAULT_RECENT_SHIPS,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("learning-tracker")
}
