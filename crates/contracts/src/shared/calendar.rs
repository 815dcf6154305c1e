//! Calendar dates as they travel on the wire (`YYYY-MM-DD`).
//!
//! Dates are anchored at UTC midnight, so a week ending on the 1st of a month
//! never drifts into the previous month because of the viewer's timezone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error produced when a wire date is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarDateError {
    #[error("expected YYYY-MM-DD, got {0:?}")]
    Shape(String),
    #[error("{0:?} is not a valid calendar date")]
    OutOfRange(String),
}

/// A calendar day without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a date of the form `YYYY-MM-DD`.
    ///
    /// Only the structure is checked: three dash-separated numeric parts
    /// forming an existing day. Leading zeros are optional.
    pub fn parse(value: &str) -> Result<Self, CalendarDateError> {
        let parts: Vec<&str> = value.split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarDateError::Shape(value.to_string()));
        };

        let is_numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !(is_numeric(*year) && is_numeric(*month) && is_numeric(*day)) {
            return Err(CalendarDateError::Shape(value.to_string()));
        }

        let (Ok(year), Ok(month), Ok(day)) = (
            year.parse::<i32>(),
            month.parse::<u32>(),
            day.parse::<u32>(),
        ) else {
            return Err(CalendarDateError::OutOfRange(value.to_string()));
        };

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CalendarDateError::OutOfRange(value.to_string()))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The instant this day starts in UTC.
    pub fn at_utc_midnight(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Zero-based month index (0 = January).
    pub fn month_index(&self) -> usize {
        self.at_utc_midnight().month0() as usize
    }

    /// Format as `MM-DD-YYYY`.
    /// Example: "2023-03-05" -> "03-05-2023"
    pub fn to_us_string(&self) -> String {
        let date = self.at_utc_midnight();
        format!("{:02}-{:02}-{}", date.month(), date.day(), date.year())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
