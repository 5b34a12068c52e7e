//! A year and a month, without a day

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    /// In `1..=12`
    month: u32,
}

impl YearMonth {
    /// Returns `None` if `month` is not in `1..=12`, or if the year is outside of what `chrono` supports
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// The month `date` belongs to
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(&self) -> i32  { self.year  }
    pub fn month(&self) -> u32 { self.month }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        let next = self.plus_months(1);
        if next == *self {
            // Already the latest supported month
            return NaiveDate::MAX;
        }
        add_days(next.first_day(), -1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Shift by `months` (which may be negative), rolling the year over when needed.
    ///
    /// Saturates to `self` if the result is outside of what `chrono` supports
    pub fn plus_months(&self, months: i32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        if year < i32::MIN as i64 || year > i32::MAX as i64 {
            return *self;
        }
        Self::new(year as i32, month).unwrap_or(*self)
    }

    pub fn minus_months(&self, months: i32) -> Self {
        self.plus_months(months.saturating_neg())
    }

    pub fn plus_years(&self, years: i32) -> Self {
        let year = self.year.saturating_add(years);
        Self::new(year, self.month).unwrap_or(*self)
    }

    pub fn minus_years(&self, years: i32) -> Self {
        self.plus_years(years.saturating_neg())
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}


/// `date + days`, or `date` itself on overflow
pub(crate) fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(date)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn invalid_months() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
    }

    #[test]
    fn month_bounds() {
        assert_eq!(ym(2025, 11).first_day(), NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(ym(2025, 11).last_day(), NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        assert_eq!(ym(2025, 12).last_day(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(ym(2024, 2).days_in_month(), 29);
        assert_eq!(ym(2025, 2).days_in_month(), 28);
    }

    #[test]
    fn month_arithmetic_rolls_years() {
        assert_eq!(ym(2025, 1).minus_months(1), ym(2024, 12));
        assert_eq!(ym(2025, 12).plus_months(1), ym(2026, 1));
        assert_eq!(ym(2025, 5).plus_months(-17), ym(2023, 12));
        assert_eq!(ym(2025, 5).plus_months(31), ym(2027, 12));
        assert_eq!(ym(2024, 2).plus_years(1), ym(2025, 2));
        assert_eq!(ym(2024, 2).minus_years(1), ym(2023, 2));
    }

    #[test]
    fn containment_and_display() {
        let november = ym(2025, 11);
        assert!(november.contains(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()));
        assert!(!november.contains(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()));
        assert_eq!(YearMonth::of(NaiveDate::from_ymd_opt(2025, 11, 17).unwrap()), november);
        assert_eq!(november.to_string(), "2025-11");
    }
}
