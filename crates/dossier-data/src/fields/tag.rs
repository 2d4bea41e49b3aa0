//! A free-form classified string attached to a source record.

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// A free-form string attached by the service to a source record, with
/// an optional classification such as "interest" or "education_type".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The string itself.
    pub content: Option<String>,
    /// What the string describes.
    pub classification: Option<String>,
}

impl Tag {
    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "@classification", self.classification.as_deref());
        put_str(&mut d, "content", self.content.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            content: r.get_str("content")?,
            classification: r.get_str("classification")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let original = Tag {
            content: Some("photography".to_string()),
            classification: Some("interest".to_string()),
            ..Default::default()
        };
        let d = original.to_dict();
        assert_eq!(
            d.get("@classification"),
            Some(&Value::String("interest".to_string()))
        );
        let decoded = Tag::from_dict(&d).unwrap();
        assert_eq!(decoded, original);
    }
}
