use serde::{Deserialize, Serialize};

use crate::TrackerError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Book,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Video => "video",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "book" => Ok(Self::Book),
            "video" => Ok(Self::Video),
            other => Err(TrackerError::InvalidInput(format!("unknown media type: {other}"))),
        }
    }
}

/// One reading or viewing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_or_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(deserialize_with = "super::lenient::rounded_u32")]
    pub time_spent_minutes: u32,
    /// Free text such as "pp 1-20" or "15/30 min"
    pub progress_label: String,
    pub takeaways: [String; 3],
    pub open_question: String,
    pub applied_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Not checked against the product list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_product_id: Option<String>,
}
