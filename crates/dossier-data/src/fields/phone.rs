//! A phone number of a person.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_i64, put_str, DictReader, FieldBase};

/// Classification of a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    /// A mobile phone.
    Mobile,
    /// A home landline.
    HomePhone,
    /// A home fax machine.
    HomeFax,
    /// A work landline.
    WorkPhone,
    /// A work fax machine.
    WorkFax,
    /// A pager.
    Pager,
}

impl PhoneType {
    /// The wire value of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            PhoneType::Mobile => "mobile",
            PhoneType::HomePhone => "home_phone",
            PhoneType::HomeFax => "home_fax",
            PhoneType::WorkPhone => "work_phone",
            PhoneType::WorkFax => "work_fax",
            PhoneType::Pager => "pager",
        }
    }
}

impl FromStr for PhoneType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "mobile" => Ok(PhoneType::Mobile),
            "home_phone" => Ok(PhoneType::HomePhone),
            "home_fax" => Ok(PhoneType::HomeFax),
            "work_phone" => Ok(PhoneType::WorkPhone),
            "work_fax" => Ok(PhoneType::WorkFax),
            "pager" => Ok(PhoneType::Pager),
            _ => Err(DataError::InvalidEnumValue {
                field: "phone type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phone number of a person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phone {
    /// Shared field metadata.
    pub base: FieldBase,
    /// International dialing prefix.
    pub country_code: Option<i64>,
    /// National number with no formatting.
    pub number: Option<i64>,
    /// Extension.
    pub extension: Option<i64>,
    /// Unparsed phone string, parsed service-side.
    pub raw: Option<String>,
    /// Classification of the phone.
    pub phone_type: Option<PhoneType>,
    /// National display form.
    pub display: Option<String>,
    /// International display form.
    pub display_international: Option<String>,
}

impl Phone {
    /// Whether the phone can be searched by: a number with its country
    /// code, or a raw string.
    pub fn is_searchable(&self) -> bool {
        (self.number.is_some() && self.country_code.is_some())
            || self.raw.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "@type", self.phone_type.map(PhoneType::as_str));
        put_i64(&mut d, "country_code", self.country_code);
        put_i64(&mut d, "number", self.number);
        put_i64(&mut d, "extension", self.extension);
        put_str(&mut d, "raw", self.raw.as_deref());
        put_str(&mut d, "display", self.display.as_deref());
        put_str(
            &mut d,
            "display_international",
            self.display_international.as_deref(),
        );
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            country_code: r.get_i64("country_code")?,
            number: r.get_i64("number")?,
            extension: r.get_i64("extension")?,
            raw: r.get_str("raw")?,
            phone_type: r.get_enum("type")?,
            display: r.get_str("display")?,
            display_international: r.get_str("display_international")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_searchable_requires_country_code_with_number() {
        let phone = Phone {
            number: Some(9998887777),
            ..Default::default()
        };
        assert!(!phone.is_searchable());
        let full = Phone {
            country_code: Some(1),
            ..phone
        };
        assert!(full.is_searchable());
    }

    #[test]
    fn test_raw_alone_is_searchable() {
        let phone = Phone {
            raw: Some("+1 (999) 888-7777".to_string()),
            ..Default::default()
        };
        assert!(phone.is_searchable());
    }

    #[test]
    fn test_round_trip() {
        let original = Phone {
            country_code: Some(1),
            number: Some(9998887777),
            phone_type: Some(PhoneType::Mobile),
            display: Some("(999) 888-7777".to_string()),
            display_international: Some("+1 999-888-7777".to_string()),
            ..Default::default()
        };
        let d = original.to_dict();
        assert_eq!(d.get("@type"), Some(&Value::String("mobile".to_string())));
        let decoded = Phone::from_dict(&d).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_zero_country_code_is_kept_on_the_wire() {
        let phone = Phone {
            country_code: Some(0),
            ..Default::default()
        };
        assert_eq!(
            phone.to_dict().get("country_code"),
            Some(&Value::Number(0.into()))
        );
    }
}
