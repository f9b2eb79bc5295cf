//! Calendar month representation
//!
//! Used by the daily balance series and by the reset engine to build
//! boundary dates.

use chrono::{Datelike, Duration, Months, NaiveDate};
use std::fmt;

/// Earliest year accepted by [`Month::new`] and [`Month::parse`]
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted by [`Month::new`] and [`Month::parse`]
pub const MAX_YEAR: i32 = 9999;

/// A calendar month (e.g. "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    /// Always the first day of the month
    start: NaiveDate,
}

impl Month {
    /// Create a month, rejecting month numbers outside 1-12 and years
    /// outside `MIN_YEAR..=MAX_YEAR`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(|start| Self { start })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            start: date - Duration::days(i64::from(date.day0())),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.num_days()) - 1)
    }

    /// Number of days in the month
    pub fn num_days(&self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Every calendar day of the month, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.num_days()).map(move |offset| start + Duration::days(i64::from(offset)))
    }

    /// The given day of this month, capped at the month's last day
    pub fn day_clamped(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.num_days());
        self.start.with_day(day).unwrap_or(self.start)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// The following month, or `None` past the end of the calendar
    pub fn next(&self) -> Option<Self> {
        self.start
            .checked_add_months(Months::new(1))
            .map(|start| Self { start })
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(MonthParseError::InvalidYear(year));
        }
        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidYear(i32),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
            MonthParseError::InvalidYear(y) => {
                write!(f, "Invalid year: {} (expected {}-{})", y, MIN_YEAR, MAX_YEAR)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(jan.start_date(), ymd(2025, 1, 1));
        assert_eq!(jan.end_date(), ymd(2025, 1, 31));
        assert_eq!(jan.num_days(), 31);
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(Month::new(2024, 2).unwrap().num_days(), 29);
        assert_eq!(Month::new(2025, 2).unwrap().num_days(), 28);
    }

    #[test]
    fn test_days_in_order() {
        let apr = Month::new(2025, 4).unwrap();
        let days: Vec<_> = apr.days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], ymd(2025, 4, 1));
        assert_eq!(days[29], ymd(2025, 4, 30));
    }

    #[test]
    fn test_day_clamped() {
        let feb = Month::new(2025, 2).unwrap();
        assert_eq!(feb.day_clamped(31), ymd(2025, 2, 28));
        assert_eq!(feb.day_clamped(0), ymd(2025, 2, 1));
        assert_eq!(feb.day_clamped(14), ymd(2025, 2, 14));
    }

    #[test]
    fn test_navigation() {
        let dec = Month::new(2024, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2025, 1));
        assert_eq!(Month::new(2025, 3).unwrap().next(), Month::new(2025, 4));
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        assert_eq!(
            Month::parse("262143-12"),
            Err(MonthParseError::InvalidYear(262143))
        );
        assert_eq!(Month::parse("0-01"), Err(MonthParseError::InvalidYear(0)));
        assert!(Month::new(10000, 1).is_none());
        assert!(Month::parse("9999-12").is_ok());
    }

    #[test]
    fn test_next_at_end_of_calendar() {
        let last = Month::of(NaiveDate::MAX);
        assert_eq!(last.next(), None);
        assert_eq!(last.end_date(), NaiveDate::MAX);
        assert_eq!(last.start_date().day(), 1);
    }

    #[test]
    fn test_of_any_day() {
        let month = Month::of(ymd(2024, 2, 29));
        assert_eq!(month, Month::new(2024, 2).unwrap());
        assert_eq!(month.end_date(), ymd(2024, 2, 29));
    }

    #[test]
    fn test_parse_and_display() {
        let month = Month::parse("2025-03").unwrap();
        assert_eq!(month, Month::new(2025, 3).unwrap());
        assert_eq!(month.to_string(), "2025-03");

        assert_eq!(Month::parse("2025-13"), Err(MonthParseError::InvalidMonth(13)));
        assert!(matches!(
            Month::parse("March"),
            Err(MonthParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_contains() {
        let jan = Month::new(2025, 1).unwrap();
        assert!(jan.contains(ymd(2025, 1, 15)));
        assert!(!jan.contains(ymd(2024, 1, 15)));
    }
}
