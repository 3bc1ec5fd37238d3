//! Day-counted activity streak.
//!
//! Only [`record_activity`] writes `streak` and `last_activity_date`.

use crate::dates::{normalize_date, parse_date};
use crate::AppState;

/// Result of applying one activity to the previous streak bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityUpdate {
    pub last_activity_date: String,
    pub streak: u32,
}

/// Pure streak policy.
///
/// | previous date | day difference | streak |
/// |---|---|---|
/// | none | - | 1 |
/// | some | 0 | unchanged |
/// | some | 1 | +1 |
/// | some | anything else, or unparsable | 1 |
///
/// The stored date always becomes `activity_date` with time-of-day dropped,
/// including for backdated entries.
#[must_use]
pub fn next_activity(previous: Option<&str>, streak: u32, activity_date: &str) -> ActivityUpdate {
    let normalized = normalize_date(activity_date).to_owned();
    let Some(previous) = previous else {
        return ActivityUpdate { last_activity_date: normalized, streak: 1 };
    };

    let diff = parse_date(previous)
        .zip(parse_date(&normalized))
        .map(|(last, current)| current.signed_duration_since(last).num_days());

    let streak = match diff {
        Some(0) => streak,
        Some(1) => streak.saturating_add(1),
        _ => 1,
    };
    ActivityUpdate { last_activity_date: normalized, streak }
}

/// Apply [`next_activity`] to the state in place.
pub fn record_activity(state: &mut AppState, activity_date: &str) {
    let update = next_activity(state.last_activity_date.as_deref(), state.streak, activity_date);
    tracing::debug!(
        date = %update.last_activity_date,
        streak = update.streak,
        "activity recorded"
    );
    state.last_activity_date = Some(update.last_activity_date);
    state.streak = update.streak;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(previous: Option<&str>, streak: u32, date: &str) -> u32 {
        next_activity(previous, streak, date).streak
    }

    #[test]
    fn consecutive_day_extends_streak() {
        assert_eq!(after(Some("2024-01-01"), 5, "2024-01-02"), 6);
    }

    #[test]
    fn same_day_keeps_streak() {
        let update = next_activity(Some("2024-01-01"), 5, "2024-01-01T18:30:00.000Z");
        assert_eq!(update.streak, 5);
        assert_eq!(update.last_activity_date, "2024-01-01");
    }

    #[test]
    fn gap_resets_streak() {
        assert_eq!(after(Some("2024-01-01"), 5, "2024-01-05"), 1);
    }

    #[test]
    fn backdated_entry_resets_streak_and_moves_date_back() {
        let update = next_activity(Some("2024-01-10"), 4, "2024-01-09");
        assert_eq!(update.streak, 1);
        assert_eq!(update.last_activity_date, "2024-01-09");
    }

    #[test]
    fn first_activity_starts_at_one() {
        assert_eq!(after(None, 0, "1999-12-31"), 1);
        assert_eq!(after(None, 42, "2024-06-01"), 1);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        assert_eq!(after(Some("2024-01-31"), 2, "2024-02-01"), 3);
    }

    #[test]
    fn unparsable_previous_date_resets() {
        assert_eq!(after(Some("garbage"), 9, "2024-01-02"), 1);
    }

    #[test]
    fn record_activity_updates_state() {
        let mut state = AppState::initial();
        record_activity(&mut state, "2024-03-01");
        record_activity(&mut state, "2024-03-02");
        assert_eq!(state.streak, 2);
        assert_eq!(state.last_activity_date.as_deref(), Some("2024-03-02"));
    }
}
