//! A screen name of a person.

use serde_json::{Map, Value};

use crate::codec::alnum_chars;
use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// A screen name used on a website or service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Username {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The screen name itself.
    pub content: Option<String>,
}

impl Username {
    /// Whether the screen name carries enough content to search by: at
    /// least four alphanumeric characters.
    pub fn is_searchable(&self) -> bool {
        alnum_chars(self.content.as_deref().unwrap_or(""))
            .chars()
            .count()
            >= 4
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "content", self.content.as_deref());
        put_str(&mut d, "display", self.content.as_deref());
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

    fn username(content: &str) -> Username {
        Username {
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_searchable_needs_four_alnum_chars() {
        assert!(username("superman").is_searchable());
        assert!(username("abcd").is_searchable());
        assert!(username("a-b-c-d").is_searchable());
        assert!(!username("abc").is_searchable());
        assert!(!username("a-b-c").is_searchable());
        assert!(!username("!!!!").is_searchable());
        assert!(!Username::default().is_searchable());
    }

    #[test]
    fn test_round_trip() {
        let original = username("superman");
        let decoded = Username::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }
}
