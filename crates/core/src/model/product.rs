use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TrackerError;

use super::MetricValue;

/// How much attention a product currently gets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Flagship,
    #[default]
    Secondary,
    Background,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flagship => "flagship",
            Self::Secondary => "secondary",
            Self::Background => "background",
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flagship" => Ok(Self::Flagship),
            "secondary" => Ok(Self::Secondary),
            "background" => Ok(Self::Background),
            other => Err(TrackerError::InvalidInput(format!("unknown product status: {other}"))),
        }
    }
}

/// Optional URLs attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// Dated snapshot of KPI readings.
///
/// Part of the persisted shape only; nothing appends to it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSnapshot {
    pub date: String,
    pub metrics: BTreeMap<String, MetricValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProductStatus,
    #[serde(default)]
    pub links: ProductLinks,
    /// KPI name to target.
    #[serde(default)]
    pub kpis: BTreeMap<String, String>,
    #[serde(default)]
    pub kpi_history: Vec<KpiSnapshot>,
}
