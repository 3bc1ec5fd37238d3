use serde::{Deserialize, Serialize};

use super::{MediaItem, Product, ShipLogItem, Skill, WeekPlan};
use crate::constants::STATE_VERSION;

/// Aggregate root holding everything the tracker knows.
///
/// `streak` and `last_activity_date` are maintained by
/// [`record_activity`](crate::record_activity) only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub version: String,
    pub products: Vec<Product>,
    pub skills: Vec<Skill>,
    /// Newest first
    pub media: Vec<MediaItem>,
    /// Newest first
    pub weeks: Vec<WeekPlan>,
    /// Newest first
    pub ship_log: Vec<ShipLogItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<String>,
    #[serde(deserialize_with = "super::lenient::rounded_u32")]
    pub streak: u32,
}

impl AppState {
    /// Empty state stamped with the current schema version.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            version: STATE_VERSION.to_owned(),
            products: Vec::new(),
            skills: Vec::new(),
            media: Vec::new(),
            weeks: Vec::new(),
            ship_log: Vec::new(),
            last_activity_date: None,
            streak: 0,
        }
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn week(&self, id: &str) -> Option<&WeekPlan> {
        self.weeks.iter().find(|w| w.id == id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial()
    }
}
