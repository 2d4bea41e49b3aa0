//! Education information of a person.

use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::date_range::DateRange;
use crate::error::DataError;
use crate::fields::{put_dict, put_str, DictReader, FieldBase};

/// Education information of a person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Education {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Degree earned or pursued.
    pub degree: Option<String>,
    /// School name.
    pub school: Option<String>,
    /// Years of study.
    pub date_range: Option<DateRange>,
    /// Display string as formatted by the service.
    pub display: Option<String>,
}

impl Education {
    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "degree", self.degree.as_deref());
        put_str(&mut d, "school", self.school.as_deref());
        put_dict(&mut d, "date_range", self.date_range.map(|dr| dr.to_dict()));
        put_str(&mut d, "display", self.display.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            degree: r.get_str("degree")?,
            school: r.get_str("school")?,
            date_range: r.get_date_range("date_range")?,
            display: r.get_str("display")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_round_trip() {
        let original = Education {
            degree: Some("B.Sc. Journalism".to_string()),
            school: Some("Metropolis University".to_string()),
            date_range: Some(DateRange::new(
                Some(NaiveDate::from_ymd_opt(2005, 9, 1).unwrap()),
                Some(NaiveDate::from_ymd_opt(2008, 5, 14).unwrap()),
            )),
            ..Default::default()
        };
        let decoded = Education::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }
}
