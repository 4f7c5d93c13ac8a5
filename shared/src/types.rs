//! Common types used across the service

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::validation::DATE_FORMAT;

/// Length of the trailing aggregate window in days
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Station whose temperature observations are served by `/tobs`
pub const DEFAULT_TOBS_STATION: &str = "USC00519281";

/// Inclusive date range used to filter measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The window of `days` days ending at `end` (both ends included).
    ///
    /// Returns `None` when the start would fall outside the representable
    /// date range.
    pub fn trailing(end: NaiveDate, days: i64) -> Option<Self> {
        let start = end.checked_sub_signed(Duration::try_days(days)?)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Lower bound in the stored `YYYY-MM-DD` form
    pub fn start_key(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// Upper bound in the stored `YYYY-MM-DD` form
    pub fn end_key(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_trailing_year_window() {
        let window = DateWindow::trailing(date("2017-08-23"), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(window.start, date("2016-08-23"));
        assert_eq!(window.end, date("2017-08-23"));
    }

    #[test]
    fn test_trailing_window_across_leap_day() {
        // 2016 is a leap year, so 365 days back from 2016-03-01 lands on 2015-03-02
        let window = DateWindow::trailing(date("2016-03-01"), DEFAULT_WINDOW_DAYS).unwrap();
        assert_eq!(window.start, date("2015-03-02"));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = DateWindow::trailing(date("2017-08-23"), DEFAULT_WINDOW_DAYS).unwrap();
        assert!(window.contains(date("2016-08-23")));
        assert!(window.contains(date("2017-08-23")));
        assert!(!window.contains(date("2016-08-22")));
        assert!(!window.contains(date("2017-08-24")));
    }

    #[test]
    fn test_trailing_window_out_of_range() {
        assert!(DateWindow::trailing(date("2017-08-23"), i64::MAX).is_none());
    }

    #[test]
    fn test_window_keys_are_zero_padded() {
        let window = DateWindow::new(date("2010-01-01"), date("2010-02-03"));
        assert_eq!(window.start_key(), "2010-01-01");
        assert_eq!(window.end_key(), "2010-02-03");
    }

    proptest! {
        /// Lexical order of window keys matches chronological order
        #[test]
        fn prop_window_keys_order_lexically(days_from_epoch in 0i64..40_000, len in 0i64..800) {
            let end = date("1950-01-01") + Duration::days(days_from_epoch);
            let window = DateWindow::trailing(end, len).unwrap();
            prop_assert!(window.start_key() <= window.end_key());
            prop_assert_eq!(window.end - window.start, Duration::days(len));
        }
    }
}
