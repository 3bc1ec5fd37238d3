use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    /// Grouping used for per-tier progress; any integer value is allowed.
    #[serde(deserialize_with = "super::lenient::rounded_i32")]
    pub tier: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Skill {
    #[must_use]
    pub fn new(id: impl Into<String>, tier: i32, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tier,
            name: name.into(),
            description: None,
            tags: None,
            done: false,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
