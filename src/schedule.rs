//! Optional dates and times attached to a task
//!
//! Every field is independent and optional, yet `start_date <= end_date` should hold whenever both are set.
//! The snapping setters of this module are the only place that enforces it, and they are used by both the add and the edit flows.
//! Assigning the fields directly (e.g. through [`TaskStore::update`](crate::store::TaskStore::update)) does not re-validate anything.

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};

/// Format of dates in labels, e.g. `2025.11.14`
const LABEL_DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    /// Times are informational only, they never affect calendar placement
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
}

impl Schedule {
    /// Build a schedule from raw values, without any snapping
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>,
               start_time: Option<NaiveTime>, end_time: Option<NaiveTime>) -> Self
    {
        Self { start_date, end_date, start_time, end_time }
    }

    /// A single-day schedule
    pub fn on(date: NaiveDate) -> Self {
        Self { start_date: Some(date), ..Self::default() }
    }

    /// A multi-day schedule. `end` snaps to `start` if it is earlier
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let mut schedule = Self::on(start);
        schedule.set_end_date(end);
        schedule
    }

    pub fn start_date(&self) -> Option<NaiveDate> { self.start_date }
    pub fn end_date(&self) -> Option<NaiveDate>   { self.end_date   }
    pub fn start_time(&self) -> Option<NaiveTime> { self.start_time }
    pub fn end_time(&self) -> Option<NaiveTime>   { self.end_time   }

    /// Set the start date.
    /// The end date moves forward to the new start date if it is unset or earlier.
    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
        match self.end_date {
            Some(end) if end >= date => {},
            _ => {
                log::debug!("End date snapped forward to {}", date);
                self.end_date = Some(date);
            }
        }
    }

    /// Set the end date.
    /// The start date moves back to the new end date if it is later.
    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = Some(date);
        if let Some(start) = self.start_date {
            if date < start {
                log::debug!("Start date snapped back to {}", date);
                self.start_date = Some(date);
            }
        }
    }

    /// Remove both dates
    pub fn clear_dates(&mut self) {
        self.start_date = None;
        self.end_date = None;
    }

    pub fn set_start_time(&mut self, time: Option<NaiveTime>) {
        self.start_time = time;
    }

    pub fn set_end_time(&mut self, time: Option<NaiveTime>) {
        self.end_time = time;
    }

    /// The end date that applies for range checks: the end date, or the start date when the end is unset
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.end_date.or(self.start_date)
    }

    /// The inclusive date span of this schedule, or `None` without a start date.
    ///
    /// An end date earlier than the start date is snapped to the start date.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.start_date?;
        let end = match self.effective_end() {
            Some(end) if end >= start => end,
            _ => start,
        };
        Some((start, end))
    }

    /// Whether `date` falls within `[start_date, effective_end]`.
    /// Returns `None` when there is no start date, so that callers can apply their own policy.
    pub fn contains(&self, date: NaiveDate) -> Option<bool> {
        let (start, end) = self.date_span()?;
        Some(start <= date && date <= end)
    }

    /// A human-readable label of the date span, e.g. `2025.11.11 - 2025.11.14`
    ///
    /// This describes the same days as [`Self::date_span`], so an inverted range reads as its start day.
    pub fn date_range_label(&self) -> Option<String> {
        let (start, end) = self.date_span()?;
        let start_part = start.format(LABEL_DATE_FORMAT).to_string();

        if end == start {
            Some(start_part)
        } else {
            Some(format!("{} - {}", start_part, end.format(LABEL_DATE_FORMAT)))
        }
    }
}
