//! Calendar-date helpers shared by every allocation operation.
//!
//! Dates are plain `YYYY-MM-DD` calendar days with no time zone.

use chrono::{Local, NaiveDate};
use std::fmt;

/// Canonical date format used for parsing and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string. Surrounding whitespace is ignored.
///
/// Only the canonical form is accepted: `2025-1-5` and `+2025-01-05` parse
/// with chrono but are rejected here.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == input)
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Treat `None`, empty and whitespace-only strings as "not provided".
pub(crate) fn provided(input: Option<&str>) -> Option<&str> {
    input.filter(|s| !s.trim().is_empty())
}

/// A start date with an optional end date. `end == None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether two ranges share at least one day.
    ///
    /// Bounded ranges are compared half-open, so a range ending on the day
    /// another one starts does not overlap it. Two open-ended ranges always
    /// overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        match (self.end, other.end) {
            (Some(end), Some(other_end)) => self.start < other_end && other.start < end,
            (None, Some(other_end)) => self.start < other_end,
            (Some(end), None) => end > other.start,
            (None, None) => true,
        }
    }

    /// Human-readable end date, `indefinite` when open-ended.
    pub fn end_label(&self) -> String {
        self.end
            .map(format_date)
            .unwrap_or_else(|| "indefinite".to_string())
    }

    /// Sentence fragment used in success messages.
    pub fn describe(&self) -> String {
        match self.end {
            Some(end) => format!("from {} to {}", format_date(self.start), format_date(end)),
            None => format!("starting from {} (indefinite)", format_date(self.start)),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} to {}", format_date(self.start), self.end_label())
    }
}
