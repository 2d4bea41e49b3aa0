//! A gender of a person.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::codec::title_case;
use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// The wire values the service reports for gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderValue {
    /// "male" on the wire.
    Male,
    /// "female" on the wire.
    Female,
}

impl GenderValue {
    /// The wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            GenderValue::Male => "male",
            GenderValue::Female => "female",
        }
    }
}

impl FromStr for GenderValue {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "male" => Ok(GenderValue::Male),
            "female" => Ok(GenderValue::Female),
            _ => Err(DataError::InvalidEnumValue {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GenderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gender of a person. Singular container slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gender {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The reported gender.
    pub content: Option<GenderValue>,
}

impl Gender {
    /// Title-cased display string, e.g. "Male".
    pub fn display(&self) -> Option<String> {
        self.content.map(|g| title_case(g.as_str()))
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "content", self.content.map(GenderValue::as_str));
        put_str(&mut d, "display", self.display().as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            content: r.get_enum("content")?,
        })
    }
}
