//! Read-side views over the state: list filters and the dashboard summary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::stats::{media_count_this_week, most_recent_ship_date, skill_progress, SkillProgress};
use crate::{AppState, MediaItem, MediaType, ShipLogItem, Skill, WeekPlan};

/// Ship entries for one product, or all of them when `product_id` is `None`.
pub fn ship_log_for_product<'a>(
    state: &'a AppState,
    product_id: Option<&'a str>,
) -> impl Iterator<Item = &'a ShipLogItem> + 'a {
    state
        .ship_log
        .iter()
        .filter(move |s| product_id.is_none_or(|p| s.product_id.as_deref() == Some(p)))
}

/// Media filtered by type and by a case-insensitive substring of any tag.
///
/// An empty or missing tag filter matches everything; with a tag filter set,
/// items without tags never match.
#[must_use]
pub fn filter_media<'a>(
    state: &'a AppState,
    media_type: Option<MediaType>,
    tag: Option<&str>,
) -> Vec<&'a MediaItem> {
    let needle = tag.map(str::to_lowercase).filter(|t| !t.is_empty());
    state
        .media
        .iter()
        .filter(|m| media_type.is_none_or(|t| m.media_type == t))
        .filter(|m| {
            needle.as_deref().is_none_or(|n| {
                m.tags.as_ref().is_some_and(|tags| tags.iter().any(|t| t.to_lowercase().contains(n)))
            })
        })
        .collect()
}

/// Skills whose name contains `search` (case-insensitive), grouped by tier.
#[must_use]
pub fn skills_by_tier<'a>(state: &'a AppState, search: &str) -> BTreeMap<i32, Vec<&'a Skill>> {
    let needle = search.to_lowercase();
    let mut grouped: BTreeMap<i32, Vec<&Skill>> = BTreeMap::new();
    for skill in state.skills.iter().filter(|s| s.name.to_lowercase().contains(&needle)) {
        grouped.entry(skill.tier).or_default().push(skill);
    }
    grouped
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub skills: SkillProgress,
    pub media_this_week: usize,
    pub last_ship_date: String,
    pub product_count: usize,
    pub open_skills: usize,
    pub streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<String>,
    pub recent_ships: Vec<ShipLogItem>,
    /// Newest week plan, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_week: Option<WeekPlan>,
}

impl DashboardSummary {
    #[must_use]
    pub fn build(state: &AppState, today: NaiveDate, recent_ships: usize) -> Self {
        Self {
            skills: skill_progress(state),
            media_this_week: media_count_this_week(state, today),
            last_ship_date: most_recent_ship_date(state).to_owned(),
            product_count: state.products.len(),
            open_skills: state.skills.iter().filter(|s| !s.done).count(),
            streak: state.streak,
            last_activity_date: state.last_activity_date.clone(),
            recent_ships: state.ship_log.iter().take(recent_ships).cloned().collect(),
            active_week: state.weeks.first().cloned(),
        }
    }
}
