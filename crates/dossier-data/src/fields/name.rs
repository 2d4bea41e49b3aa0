//! A name of a person.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::codec::alpha_chars;
use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// Classification of a name within a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameType {
    /// The name currently in use.
    Present,
    /// A maiden name.
    Maiden,
    /// A name used in the past.
    Former,
    /// A known alias.
    Alias,
    /// An alternative spelling or transliteration.
    Alternative,
    /// A name synthesized by the service.
    Autogenerated,
}

impl NameType {
    /// The wire value of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            NameType::Present => "present",
            NameType::Maiden => "maiden",
            NameType::Former => "former",
            NameType::Alias => "alias",
            NameType::Alternative => "alternative",
            NameType::Autogenerated => "autogenerated",
        }
    }
}

impl FromStr for NameType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "present" => Ok(NameType::Present),
            "maiden" => Ok(NameType::Maiden),
            "former" => Ok(NameType::Former),
            "alias" => Ok(NameType::Alias),
            "alternative" => Ok(NameType::Alternative),
            "autogenerated" => Ok(NameType::Autogenerated),
            _ => Err(DataError::InvalidEnumValue {
                field: "name type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name of a person.
///
/// `raw` is an unparsed name like "Clark J. Kent", useful for querying
/// without parsing. Response data always carries parsed names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Name {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Honorific prefix ("Mr.", "Dr.").
    pub prefix: Option<String>,
    /// First name.
    pub first: Option<String>,
    /// Middle name.
    pub middle: Option<String>,
    /// Last name.
    pub last: Option<String>,
    /// Honorific suffix ("Jr.", "III").
    pub suffix: Option<String>,
    /// Unparsed name, only meaningful in queries.
    pub raw: Option<String>,
    /// Classification of the name.
    pub name_type: Option<NameType>,
    /// Display string as formatted by the service.
    pub display: Option<String>,
}

impl Name {
    /// Whether the name carries enough content to search by: at least
    /// two alphabetic characters in both first and last, or at least
    /// four in the raw form.
    pub fn is_searchable(&self) -> bool {
        let first = alpha_chars(self.first.as_deref().unwrap_or(""));
        let last = alpha_chars(self.last.as_deref().unwrap_or(""));
        let raw = alpha_chars(self.raw.as_deref().unwrap_or(""));
        (first.chars().count() >= 2 && last.chars().count() >= 2) || raw.chars().count() >= 4
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "@type", self.name_type.map(NameType::as_str));
        put_str(&mut d, "prefix", self.prefix.as_deref());
        put_str(&mut d, "first", self.first.as_deref());
        put_str(&mut d, "middle", self.middle.as_deref());
        put_str(&mut d, "last", self.last.as_deref());
        put_str(&mut d, "suffix", self.suffix.as_deref());
        put_str(&mut d, "raw", self.raw.as_deref());
        put_str(&mut d, "display", self.display.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            prefix: r.get_str("prefix")?,
            first: r.get_str("first")?,
            middle: r.get_str("middle")?,
            last: r.get_str("last")?,
            suffix: r.get_str("suffix")?,
            raw: r.get_str("raw")?,
            name_type: r.get_enum("type")?,
            display: r.get_str("display")?,
        })
    }
}
