//! A site-scoped unique identifier of a person.

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// A unique identifier scoped to a single website, in the form
/// `identifier@domain` (e.g. `11231@facebook`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserId {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The identifier itself, `identifier@domain`.
    pub content: Option<String>,
}

impl UserId {
    /// Whether the identifier is well-formed enough to search by:
    /// exactly one `@` with non-blank text on both sides.
    pub fn is_searchable(&self) -> bool {
        let Some(content) = self.content.as_deref() else {
            return false;
        };
        let mut parts = content.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(domain), None) => {
                !id.trim().is_empty() && !domain.trim().is_empty()
            }
            _ => false,
        }
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

    fn user_id(content: &str) -> UserId {
        UserId {
            content: Some(content.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_searchable_needs_both_sides_of_the_at() {
        assert!(user_id("11231@facebook").is_searchable());
        assert!(!user_id("11231@").is_searchable());
        assert!(!user_id("@facebook").is_searchable());
        assert!(!user_id("11231").is_searchable());
        assert!(!user_id("a@b@c").is_searchable());
        assert!(!user_id(" @facebook").is_searchable());
        assert!(!UserId::default().is_searchable());
    }

    #[test]
    fn test_round_trip() {
        let original = user_id("11231@facebook");
        let decoded = UserId::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }
}
