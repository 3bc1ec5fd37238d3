use chrono::{Local, NaiveDate};

/// Source of "today" for actions, seed data and weekly statistics.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
