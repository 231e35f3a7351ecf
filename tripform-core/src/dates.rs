use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A start/end calendar-date pair maintaining `end >= start`.
///
/// Moving `start` past `end` pushes `end` forward to `start + offset`,
/// matching the "auto-adjust return date" behavior of the booking screens.
/// Dates are local-calendar-day granularity only; no timezone handling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    /// Gap re-applied whenever `start` overtakes `end`.
    offset_days: i64,
}

impl DateRange {
    /// Create a range starting at `start` and ending `offset_days` later.
    pub fn new(start: NaiveDate, offset_days: i64) -> Self {
        Self {
            start,
            end: start + Duration::days(offset_days),
            offset_days,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn offset_days(&self) -> i64 {
        self.offset_days
    }

    /// Move the start date. If the end date would fall before the new
    /// start, it advances to `start + offset_days`; otherwise it stays put.
    pub fn set_start(&mut self, date: NaiveDate) {
        self.start = date;
        if self.end < self.start {
            self.end = self.start + Duration::days(self.offset_days);
        }
    }

    /// Move the end date. A date earlier than `start` clamps up to `start`,
    /// even when the picker UI already constrains its selectable minimum.
    pub fn set_end(&mut self, date: NaiveDate) {
        self.end = date.max(self.start);
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
