//! Calendar-date helpers. Dates are stored as ISO `YYYY-MM-DD` strings, so
//! lexicographic order is chronological order.

use chrono::{Datelike, Days, NaiveDate};

use crate::{Result, TrackerError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Drop any time-of-day suffix, keeping the leading `YYYY-MM-DD`.
#[must_use]
pub fn normalize_date(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

/// Parse the calendar date at the start of `raw`, ignoring time-of-day.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(normalize_date(raw), DATE_FORMAT).ok()
}

/// Parse a bare `YYYY-MM-DD` date, as typed into an entry form.
///
/// # Errors
/// Returns `InvalidDate` for anything else, including a trailing time-of-day.
pub fn parse_strict(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| TrackerError::InvalidDate(raw.to_owned()))
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Start of the Monday-based week containing `today`. Sunday maps to six days prior.
#[must_use]
pub fn most_recent_monday(today: NaiveDate) -> NaiveDate {
    let offset = u64::from(today.weekday().num_days_from_monday());
    today.checked_sub_days(Days::new(offset)).unwrap_or(today)
}
