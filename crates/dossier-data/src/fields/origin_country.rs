//! A country of origin of a person.

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};
use crate::geo;

/// A country of origin of a person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginCountry {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Two-letter country code.
    pub country: Option<String>,
}

impl OriginCountry {
    /// Full display name of the country, e.g. "FR" becomes "France".
    pub fn display(&self) -> Option<&'static str> {
        self.country.as_deref().and_then(geo::country_name)
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "country", self.country.as_deref());
        put_str(&mut d, "display", self.display());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            country: r.get_str("country")?,
        })
    }
}
