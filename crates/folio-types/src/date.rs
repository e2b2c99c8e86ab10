use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A calendar month, written as zero-padded "YYYY-MM" in datasets.
///
/// Field order makes the derived `Ord` chronological, which matches the
/// lexical order of the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a YearMonth; `month` is 1-based. Returns None when out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(0..=9999).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months since year 0: `year * 12 + month - 1`
    pub fn month_index(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// January of the given year
    pub fn january(year: i32) -> Option<Self> {
        Self::new(year, 1)
    }

    /// Abbreviated month name and full year, e.g. "Jun 2021"
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDate(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Whole months from `start` to `end`; zero when `end` precedes `start`
pub fn months_between(start: YearMonth, end: YearMonth) -> u32 {
    let diff = end.month_index() - start.month_index();
    diff.max(0) as u32
}

/// Human tenure between two months: "1 year, 6 months", "1 year", "0 months"
pub fn format_duration(start: YearMonth, end: YearMonth) -> String {
    format_months(months_between(start, end))
}

/// Split a month count into years and months: "2 years, 1 month"
pub fn format_months(months: u32) -> String {
    let years = months / 12;
    let remaining = months % 12;

    if years == 0 {
        return pluralize(remaining, "month");
    }
    if remaining == 0 {
        return pluralize(years, "year");
    }
    format!("{}, {}", pluralize(years, "year"), pluralize(remaining, "month"))
}

/// "Jun 2021 - Jul 2023"
pub fn format_range(start: YearMonth, end: YearMonth) -> String {
    format!("{} - {}", start.label(), end.label())
}

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["2021-6", "21-06", "2021/06", "2021-13", "2021-00", "abcd-ef", ""] {
            assert!(bad.parse::<YearMonth>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_month_index() {
        assert_eq!(ym("2020-01").month_index(), 2020 * 12);
        assert_eq!(ym("2020-12").month_index(), 2020 * 12 + 11);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(ym("2019-12") < ym("2020-01"));
        assert!(ym("2020-02") > ym("2020-01"));
    }

    #[test]
    fn test_duration_saturates_when_reversed() {
        assert_eq!(format_duration(ym("2021-01"), ym("2020-01")), "0 months");
    }

    #[test]
    fn test_display_round_trips_padding() {
        assert_eq!(ym("0999-03").to_string(), "0999-03");
    }
}
