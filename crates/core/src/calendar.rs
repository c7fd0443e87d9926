//! Calendar windows used by the aggregations.
//!
//! All windows are inclusive on both ends and expressed in calendar dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Short English month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day in the range.
    pub start: NaiveDate,
    /// Last day in the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. No ordering check: an inverted range is simply empty.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if `date` lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Smallest range covering both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`.
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// The whole calendar month containing `date`.
#[must_use]
pub fn month_window(date: NaiveDate) -> DateRange {
    DateRange::new(month_start(date), month_end(date))
}

/// The whole calendar month before the one containing `date`.
#[must_use]
pub fn previous_month_window(date: NaiveDate) -> DateRange {
    let last_of_previous = month_start(date).pred_opt().unwrap_or(date);
    month_window(last_of_previous)
}

/// January 1 through December 31 of the year containing `date`.
#[must_use]
pub fn year_window(date: NaiveDate) -> DateRange {
    let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
    DateRange::new(start, end)
}

/// January 1 of the year containing `date` through `date` itself.
#[must_use]
pub fn year_to_date(date: NaiveDate) -> DateRange {
    DateRange::new(year_window(date).start, date)
}

/// Short label for a 1-based month number, or `"?"` when out of range.
#[must_use]
pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| MONTH_LABELS.get(index))
        .copied()
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_window_regular() {
        let window = month_window(d(2025, 4, 17));
        assert_eq!(window.start, d(2025, 4, 1));
        assert_eq!(window.end, d(2025, 4, 30));
    }

    #[test]
    fn test_month_window_december() {
        let window = month_window(d(2025, 12, 31));
        assert_eq!(window.start, d(2025, 12, 1));
        assert_eq!(window.end, d(2025, 12, 31));
    }

    #[test]
    fn test_month_window_leap_february() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2025, 2, 10)), d(2025, 2, 28));
    }

    #[test]
    fn test_previous_month_crosses_year() {
        let window = previous_month_window(d(2025, 1, 15));
        assert_eq!(window.start, d(2024, 12, 1));
        assert_eq!(window.end, d(2024, 12, 31));
    }

    #[test]
    fn test_previous_month_from_march_in_leap_year() {
        let window = previous_month_window(d(2024, 3, 31));
        assert_eq!(window.start, d(2024, 2, 1));
        assert_eq!(window.end, d(2024, 2, 29));
    }

    #[test]
    fn test_year_windows() {
        let today = d(2025, 6, 9);
        assert_eq!(year_window(today), DateRange::new(d(2025, 1, 1), d(2025, 12, 31)));
        assert_eq!(year_to_date(today), DateRange::new(d(2025, 1, 1), today));
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(d(2025, 1, 1), d(2025, 1, 31));
        assert!(range.contains(d(2025, 1, 1)));
        assert!(range.contains(d(2025, 1, 31)));
        assert!(!range.contains(d(2025, 2, 1)));
        assert!(!range.contains(d(2024, 12, 31)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(d(2025, 2, 1), d(2025, 1, 1));
        assert!(!range.contains(d(2025, 2, 1)));
        assert!(!range.contains(d(2025, 1, 15)));
    }

    #[test]
    fn test_union() {
        let a = DateRange::new(d(2025, 1, 1), d(2025, 1, 31));
        let b = DateRange::new(d(2024, 12, 1), d(2024, 12, 31));
        assert_eq!(a.union(&b), DateRange::new(d(2024, 12, 1), d(2025, 1, 31)));
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(1), "Jan");
        assert_eq!(month_label(12), "Dec");
        assert_eq!(month_label(0), "?");
        assert_eq!(month_label(13), "?");
    }
}
