//! Client-side store of posting periods.
//!
//! The study group runs in numbered rounds ("기"); the entry screen shows the
//! one currently underway. The store is plain injected state, created by the
//! app and handed to the views.

use chrono::NaiveDate;

/// One posting round.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    /// Round number, 1-based
    pub round: u32,
    /// Display label, e.g. "3기"
    pub label: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl Period {
    pub fn new(round: u32, starts_on: NaiveDate, ends_on: NaiveDate) -> Self {
        Self {
            round,
            label: format!("{round}기"),
            starts_on,
            ends_on,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.ends_on
    }
}

/// Store of the rounds the group has run; the last one is current.
#[derive(Debug, Default)]
pub struct PeriodStore {
    periods: Vec<Period>,
}

impl PeriodStore {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// The round currently underway, if any.
    pub fn current(&self) -> Option<&Period> {
        self.periods.last()
    }

    pub fn push(&mut self, period: Period) {
        self.periods.push(period);
    }
}
