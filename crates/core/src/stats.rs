//! Derived statistics. Every function here is pure: same state and same
//! `today` give the same answer, and nothing is mutated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::NO_SHIP_DATE;
use crate::dates::{most_recent_monday, parse_date};
use crate::AppState;

/// Completion percentage of one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierProgress {
    pub tier: i32,
    pub progress: f64,
}

/// Overall and per-tier completion, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProgress {
    pub overall: f64,
    pub per_tier: Vec<TierProgress>,
}

#[allow(clippy::cast_precision_loss, reason = "skill counts are far below 2^52")]
fn percentage(done: usize, total: usize) -> f64 {
    done as f64 / total.max(1) as f64 * 100.0
}

/// Share of done skills, 0-100. An empty skill list yields 0.
#[must_use]
pub fn overall_skill_progress(state: &AppState) -> f64 {
    let done = state.skills.iter().filter(|s| s.done).count();
    percentage(done, state.skills.len())
}

/// One entry per tier that has at least one skill, ascending by tier.
#[must_use]
pub fn per_tier_skill_progress(state: &AppState) -> Vec<TierProgress> {
    let mut tiers: BTreeMap<i32, (usize, usize)> = BTreeMap::new();
    for skill in &state.skills {
        let (done, total) = tiers.entry(skill.tier).or_default();
        *total += 1;
        if skill.done {
            *done += 1;
        }
    }
    tiers
        .into_iter()
        .map(|(tier, (done, total))| TierProgress { tier, progress: percentage(done, total) })
        .collect()
}

#[must_use]
pub fn skill_progress(state: &AppState) -> SkillProgress {
    SkillProgress {
        overall: overall_skill_progress(state),
        per_tier: per_tier_skill_progress(state),
    }
}

/// Media items dated on or after the Monday of the week containing `today`.
///
/// Items whose date cannot be parsed are not counted.
#[must_use]
pub fn media_count_this_week(state: &AppState, today: NaiveDate) -> usize {
    let week_start = most_recent_monday(today);
    state
        .media
        .iter()
        .filter(|m| parse_date(&m.date).is_some_and(|d| d >= week_start))
        .count()
}

/// Latest ship date, or [`NO_SHIP_DATE`] when nothing has shipped.
#[must_use]
pub fn most_recent_ship_date(state: &AppState) -> &str {
    state.ship_log.iter().map(|s| s.date.as_str()).max().unwrap_or(NO_SHIP_DATE)
}
