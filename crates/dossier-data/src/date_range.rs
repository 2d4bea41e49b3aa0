//! A time interval represented as a range of two dates.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde_json::{Map, Value};

use crate::codec::{format_date, parse_date, DictSerializable};
use crate::error::DataError;

/// An interval between two dates, used inside DOB, Job and Education
/// fields.
///
/// An exact date is a range with `start == end`. Construction
/// normalizes ordering: if both bounds are given reversed they are
/// swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest possible date, inclusive.
    pub start: Option<NaiveDate>,
    /// Latest possible date, inclusive.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range from two optional bounds, swapping them if both
    /// are present and reversed.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if s > e => Self {
                start: Some(e),
                end: Some(s),
            },
            _ => Self { start, end },
        }
    }

    /// A range holding a single exact date.
    pub fn exact(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: Some(date),
        }
    }

    /// Expand a pair of calendar years into Jan 1 of the start year
    /// through Dec 31 of the end year.
    pub fn from_years_range(start_year: i32, end_year: i32) -> Result<Self, DataError> {
        let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
            .ok_or_else(|| DataError::InvalidArgument(format!("invalid year: {start_year}")))?;
        let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
            .ok_or_else(|| DataError::InvalidArgument(format!("invalid year: {end_year}")))?;
        Ok(Self::new(Some(start), Some(end)))
    }

    /// True if the range holds an exact date (`start == end`).
    pub fn is_exact(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s == e)
    }

    /// The middle of the range. With a single bound, that bound is
    /// returned as-is.
    pub fn middle(&self) -> Option<NaiveDate> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some(s + Duration::days((e - s).num_days() / 2)),
            (start, end) => start.or(end),
        }
    }

    /// The years of the two bounds, or None unless both are present.
    pub fn years_range(&self) -> Option<(i32, i32)> {
        use chrono::Datelike;
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((s.year(), e.year())),
            _ => None,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(s), Some(e)) => write!(f, "{} - {}", format_date(s), format_date(e)),
            (Some(s), None) => write!(f, "{}", format_date(s)),
            _ => Ok(()),
        }
    }
}

impl DictSerializable for DateRange {
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        if let Some(start) = self.start {
            d.insert("start".to_string(), Value::String(format_date(start)));
        }
        if let Some(end) = self.end {
            d.insert("end".to_string(), Value::String(format_date(end)));
        }
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let bound = |key: &str| -> Result<Option<NaiveDate>, DataError> {
            match d.get(key) {
                Some(Value::String(s)) => Ok(Some(parse_date(s)?)),
                Some(Value::Null) | None => Ok(None),
                Some(other) => Err(DataError::Decode(format!(
                    "date_range {key} must be a string, got {other}"
                ))),
            }
        };
        let start = bound("start")?;
        let end = bound("end")?;
        if start.is_none() && end.is_none() {
            return Err(DataError::Decode(
                "date_range must have at least a start or an end date".to_string(),
            ));
        }
        Ok(Self::new(start, end))
    }
}
