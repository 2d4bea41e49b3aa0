//! An ethnicity of a person.

use serde_json::{Map, Value};

use crate::codec::title_case;
use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// An ethnicity of a person, as reported in census-style records.
///
/// The wire value is a lowercase snake_case token such as
/// "native_hawaiian". The token set is maintained server-side and new
/// tokens appear over time, so the content is kept as an open string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ethnicity {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Lowercase snake_case ethnicity token.
    pub content: Option<String>,
}

impl Ethnicity {
    /// Human-readable display string, e.g. "native_hawaiian" becomes
    /// "Native Hawaiian".
    pub fn display(&self) -> Option<String> {
        self.content
            .as_deref()
            .map(|c| title_case(&c.replace('_', " ")))
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "content", self.content.as_deref());
        put_str(&mut d, "display", self.display().as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            content: r.get_str("content")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_expands_snake_case() {
        let ethnicity = Ethnicity {
            content: Some("native_hawaiian".to_string()),
            ..Default::default()
        };
        assert_eq!(ethnicity.display().as_deref(), Some("Native Hawaiian"));
        assert_eq!(Ethnicity::default().display(), None);
    }

    #[test]
    fn test_round_trip() {
        let original = Ethnicity {
            content: Some("white".to_string()),
            ..Default::default()
        };
        let decoded = Ethnicity::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }
}
