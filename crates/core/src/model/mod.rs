//! Entity definitions and the aggregate state.
//!
//! Field names serialize in camelCase so the persisted blob keeps the shape
//! written by the browser build of the tracker.

mod lenient;
mod media;
mod product;
mod ship;
mod skill;
mod state;
mod week;

pub use media::*;
pub use product::*;
pub use ship::*;
pub use skill::*;
pub use state::*;
pub use week::*;

use serde::{Deserialize, Serialize};

/// A metric reading that may be recorded as a number or as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
