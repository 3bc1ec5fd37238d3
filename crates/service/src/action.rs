//! State transitions the tracker understands.

use learning_tracker_core::{AppState, MediaItem, Product, ShipLogItem, Skill, WeekPlan};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Payload of [`Action::ToggleSkill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillToggle {
    pub id: String,
    pub done: bool,
    /// Replaces the skill's notes when present; existing notes are kept otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One state transition.
///
/// Serialized as `{"type": "...", "payload": ...}`. Any tag not listed here
/// decodes to [`Action::Unknown`] whatever its payload, and the reducer
/// ignores it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    Load(AppState),
    Seed,
    Reset,
    Import(AppState),
    AddProduct(Product),
    UpdateProduct(Product),
    ToggleSkill(SkillToggle),
    UpdateSkill(Skill),
    AddMedia(MediaItem),
    UpdateMedia(MediaItem),
    AddWeek(WeekPlan),
    UpdateWeek(WeekPlan),
    AddShip(ShipLogItem),
    UpdateShip(ShipLogItem),
    Unknown,
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawAction { kind, payload } = RawAction::deserialize(deserializer)?;
        let decoded = match kind.as_str() {
            "load" => serde_json::from_value(payload).map(Self::Load),
            "seed" => Ok(Self::Seed),
            "reset" => Ok(Self::Reset),
            "import" => serde_json::from_value(payload).map(Self::Import),
            "addProduct" => serde_json::from_value(payload).map(Self::AddProduct),
            "updateProduct" => serde_json::from_value(payload).map(Self::UpdateProduct),
            "toggleSkill" => serde_json::from_value(payload).map(Self::ToggleSkill),
            "updateSkill" => serde_json::from_value(payload).map(Self::UpdateSkill),
            "addMedia" => serde_json::from_value(payload).map(Self::AddMedia),
            "updateMedia" => serde_json::from_value(payload).map(Self::UpdateMedia),
            "addWeek" => serde_json::from_value(payload).map(Self::AddWeek),
            "updateWeek" => serde_json::from_value(payload).map(Self::UpdateWeek),
            "addShip" => serde_json::from_value(payload).map(Self::AddShip),
            "updateShip" => serde_json::from_value(payload).map(Self::UpdateShip),
            other => {
                tracing::debug!(action = other, "ignoring unknown action");
                Ok(Self::Unknown)
            },
        };
        decoded.map_err(|e| <D::Error as DeError>::custom(format!("invalid {kind} payload: {e}")))
    }
}
