//! Date of birth of a person.

use chrono::{Datelike, Local, NaiveDate};
use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::date_range::DateRange;
use crate::error::DataError;
use crate::fields::{put_dict, put_str, DictReader, FieldBase};

/// Date of birth of a person.
///
/// The birth date is carried as a [`DateRange`]; an exact birth date is
/// a range whose bounds coincide. Ages are derived from the range
/// middle against today's date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dob {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The range the birth date is known to fall within.
    pub date_range: Option<DateRange>,
    /// Display string as formatted by the service.
    pub display: Option<String>,
}

impl Dob {
    /// A DOB known to an exact birth date. Fails on a future date.
    pub fn from_birth_date(birth_date: NaiveDate) -> Result<Self, DataError> {
        if birth_date > Local::now().date_naive() {
            return Err(DataError::InvalidArgument(
                "birth_date must not be in the future".to_string(),
            ));
        }
        Ok(Self {
            date_range: Some(DateRange::exact(birth_date)),
            ..Default::default()
        })
    }

    /// A DOB known to a calendar year.
    pub fn from_birth_year(year: i32) -> Result<Self, DataError> {
        if year <= 0 {
            return Err(DataError::InvalidArgument(format!(
                "birth year must be positive, got {year}"
            )));
        }
        Ok(Self {
            date_range: Some(DateRange::from_years_range(year, year)?),
            ..Default::default()
        })
    }

    /// A DOB known to an exact age in years.
    pub fn from_age(age: u32) -> Result<Self, DataError> {
        Self::from_age_range(age, age)
    }

    /// A DOB known to an age bracket. A reversed bracket is swapped.
    pub fn from_age_range(start_age: u32, end_age: u32) -> Result<Self, DataError> {
        let (start_age, end_age) = if start_age > end_age {
            (end_age, start_age)
        } else {
            (start_age, end_age)
        };
        let today = Local::now().date_naive();
        let start = replace_year(today, today.year() - end_age as i32 - 1)
            .succ_opt()
            .ok_or_else(|| {
                DataError::InvalidArgument(format!("age out of range: {end_age}"))
            })?;
        let end = replace_year(today, today.year() - start_age as i32);
        Ok(Self {
            date_range: Some(DateRange::new(Some(start), Some(end))),
            ..Default::default()
        })
    }

    /// Whether the field can be searched by. Any known range will do.
    pub fn is_searchable(&self) -> bool {
        self.date_range.is_some()
    }

    /// Estimated age in whole years as of today.
    pub fn age(&self) -> Option<i32> {
        self.age_at(Local::now().date_naive())
    }

    /// Estimated age in whole years as of the given date, from the
    /// middle of the known range.
    pub fn age_at(&self, today: NaiveDate) -> Option<i32> {
        let birth = self.date_range.as_ref()?.middle()?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }

    /// The possible ages implied by the range bounds, youngest first.
    pub fn age_range(&self) -> Option<(i32, i32)> {
        let range = self.date_range.as_ref()?;
        let (start, end) = (range.start?, range.end?);
        let today = Local::now().date_naive();
        let youngest = Dob {
            date_range: Some(DateRange::exact(end)),
            ..Default::default()
        }
        .age_at(today)?;
        let oldest = Dob {
            date_range: Some(DateRange::exact(start)),
            ..Default::default()
        }
        .age_at(today)?;
        Some((youngest, oldest))
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_dict(&mut d, "date_range", self.date_range.map(|dr| dr.to_dict()));
        put_str(&mut d, "display", self.display.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            date_range: r.get_date_range("date_range")?,
            display: r.get_str("display")?,
        })
    }
}

/// Move a date to another year, clamping Feb 29 to Feb 28 when the
/// target year is not a leap year.
fn replace_year(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}
