//! An image of a person.

use serde_json::{Map, Value};

use crate::codec::is_valid_url;
use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};

/// An image of a person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    /// Shared field metadata.
    pub base: FieldBase,
    /// URL of the image.
    pub url: Option<String>,
    /// Opaque token for the service's thumbnail endpoint.
    pub thumbnail_token: Option<String>,
}

impl Image {
    /// Whether the URL looks like a fetchable absolute URL.
    pub fn is_valid_url(&self) -> bool {
        self.url.as_deref().is_some_and(is_valid_url)
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "url", self.url.as_deref());
        put_str(&mut d, "thumbnail_token", self.thumbnail_token.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            url: r.get_str("url")?,
            thumbnail_token: r.get_str("thumbnail_token")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validity() {
        let image = Image {
            url: Some("https://img.example.com/clark.jpg".to_string()),
            ..Default::default()
        };
        assert!(image.is_valid_url());
        let relative = Image {
            url: Some("img/clark.jpg".to_string()),
            ..Default::default()
        };
        assert!(!relative.is_valid_url());
        assert!(!Image::default().is_valid_url());
    }

    #[test]
    fn test_round_trip() {
        let original = Image {
            url: Some("https://img.example.com/clark.jpg".to_string()),
            thumbnail_token: Some("AE2861B2-43BF".to_string()),
            ..Default::default()
        };
        let decoded = Image::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_wire_carries_only_url_and_token() {
        let image = Image {
            url: Some("https://img.example.com/clark.jpg".to_string()),
            thumbnail_token: Some("AE2861B2-43BF".to_string()),
            ..Default::default()
        };
        let d = image.to_dict();
        assert_eq!(d.len(), 2);
        assert!(!d.contains_key("display"));
    }
}
