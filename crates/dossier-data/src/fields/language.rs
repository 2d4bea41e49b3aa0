//! A language familiarity of a person.

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// A language the person is familiar with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Language {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Two-letter language code, e.g. "en".
    pub language: Option<String>,
    /// Two-letter country code qualifying the language, e.g. "US".
    pub region: Option<String>,
    /// Display string, typically "language_REGION" like "en_US".
    pub display: Option<String>,
}

impl Language {
    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "language", self.language.as_deref());
        put_str(&mut d, "region", self.region.as_deref());
        put_str(&mut d, "display", self.display.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            language: r.get_str("language")?,
            region: r.get_str("region")?,
            display: r.get_str("display")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let original = Language {
            language: Some("en".to_string()),
            region: Some("US".to_string()),
            display: Some("en_US".to_string()),
            ..Default::default()
        };
        let decoded = Language::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }
}
