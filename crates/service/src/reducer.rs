//! The single state-transition function.

use chrono::NaiveDate;
use learning_tracker_core::dates::format_date;
use learning_tracker_core::{
    record_activity, AppState, MediaItem, Product, ShipLogItem, Skill, WeekPlan,
};

use crate::action::{Action, SkillToggle};
use crate::seed::seed_state;

trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(Product, Skill, MediaItem, WeekPlan, ShipLogItem);

/// Replace the entry whose id matches `item`; silently skip when none does.
fn replace_by_id<T: Identified>(items: &mut [T], item: T) {
    if let Some(slot) = items.iter_mut().find(|existing| existing.id() == item.id()) {
        *slot = item;
    }
}

/// Apply `action` to `state`. Never fails.
///
/// `today` is the date recorded for actions that count as activity "now"
/// (completing a skill, adding or editing a week). Media and ship entries
/// record their own date instead.
pub fn reduce(state: &mut AppState, action: Action, today: NaiveDate) {
    tracing::debug!(action = action.name(), "reducing");
    match action {
        Action::Load(next) | Action::Import(next) => *state = next,
        Action::Seed => *state = seed_state(today),
        Action::Reset => *state = AppState::initial(),
        Action::AddProduct(product) => state.products.push(product),
        Action::UpdateProduct(product) => replace_by_id(&mut state.products, product),
        Action::ToggleSkill(SkillToggle { id, done, notes }) => {
            if let Some(skill) = state.skills.iter_mut().find(|s| s.id == id) {
                skill.done = done;
                if notes.is_some() {
                    skill.notes = notes;
                }
            }
            // un-marking is not fresh activity
            if done {
                record_activity(state, &format_date(today));
            }
        },
        Action::UpdateSkill(skill) => replace_by_id(&mut state.skills, skill),
        Action::AddMedia(item) => {
            let date = item.date.clone();
            state.media.insert(0, item);
            record_activity(state, &date);
        },
        Action::UpdateMedia(item) => replace_by_id(&mut state.media, item),
        Action::AddWeek(week) => {
            state.weeks.insert(0, week);
            record_activity(state, &format_date(today));
        },
        Action::UpdateWeek(week) => {
            replace_by_id(&mut state.weeks, week);
            record_activity(state, &format_date(today));
        },
        Action::AddShip(item) => {
            let date = item.date.clone();
            state.ship_log.insert(0, item);
            record_activity(state, &date);
        },
        Action::UpdateShip(item) => replace_by_id(&mut state.ship_log, item),
        Action::Unknown => {},
    }
}
