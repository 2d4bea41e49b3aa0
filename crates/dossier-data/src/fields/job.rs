//! Employment information of a person.

use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::date_range::DateRange;
use crate::error::DataError;
use crate::fields::{put_dict, put_str, DictReader, FieldBase};

/// Employment information of a person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Job title.
    pub title: Option<String>,
    /// Employer name.
    pub organization: Option<String>,
    /// Industry of the employer.
    pub industry: Option<String>,
    /// Years of employment.
    pub date_range: Option<DateRange>,
    /// Display string as formatted by the service.
    pub display: Option<String>,
}

impl Job {
    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "title", self.title.as_deref());
        put_str(&mut d, "organization", self.organization.as_deref());
        put_str(&mut d, "industry", self.industry.as_deref());
        put_dict(&mut d, "date_range", self.date_range.map(|dr| dr.to_dict()));
        put_str(&mut d, "display", self.display.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            title: r.get_str("title")?,
            organization: r.get_str("organization")?,
            industry: r.get_str("industry")?,
            date_range: r.get_date_range("date_range")?,
            display: r.get_str("display")?,
        })
    }
}
