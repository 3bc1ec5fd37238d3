use serde::{Deserialize, Serialize};

/// Something released, with evidence links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipLogItem {
    pub id: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub summary: String,
    /// Never empty when created through a draft
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_delta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
