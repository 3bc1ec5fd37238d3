use serde::{Deserialize, Serialize};

use super::MetricValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGoal {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub done: bool,
}

impl WeekGoal {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), link: None, done: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMove {
    pub metric_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Plan and review for one Monday-start week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub id: String,
    pub week_start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagship_product_id: Option<String>,
    pub ship_goal: WeekGoal,
    pub ai_focus: WeekGoal,
    pub eng_focus: WeekGoal,
    pub media_goal: WeekGoal,
    #[serde(default)]
    pub metrics_moved: Vec<MetricMove>,
    #[serde(default)]
    pub review_text: String,
}
