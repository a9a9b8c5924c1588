//! Shared utility functions for the COVID dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Duration, NaiveDate};

    /// Three-letter month labels, January first.
    const MONTH_ABBR: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Last calendar day of the month containing `date`.
    ///
    /// Day 28 exists in every month, and four days later is always in the
    /// following month; stepping back by that date's day-of-month lands on
    /// the last day of the original month.
    pub fn last_day_of_month(date: &NaiveDate) -> NaiveDate {
        let day_28 = date.with_day(28).unwrap_or(*date);
        let next_month = day_28 + Duration::days(4);
        next_month - Duration::days(next_month.day() as i64)
    }

    /// The twelve month-end dates of `year`, January first.
    pub fn month_end_dates(year: i32) -> Vec<NaiveDate> {
        (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
            .map(|first| last_day_of_month(&first))
            .collect()
    }

    /// Abbreviated month name ("Jan".."Dec") for a 1-based month number.
    pub fn month_abbr(month: u32) -> Option<&'static str> {
        match month {
            1..=12 => Some(MONTH_ABBR[(month - 1) as usize]),
            _ => None,
        }
    }

}
