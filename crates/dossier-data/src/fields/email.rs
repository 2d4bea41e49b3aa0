//! An email address of a person.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::codec::EMAIL_RE;
use crate::error::DataError;
use crate::fields::{put_bool, put_str, DictReader, FieldBase};

/// Classification of an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailType {
    /// A personal address.
    Personal,
    /// A work address.
    Work,
}

impl EmailType {
    /// The wire value of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            EmailType::Personal => "personal",
            EmailType::Work => "work",
        }
    }
}

impl FromStr for EmailType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "personal" => Ok(EmailType::Personal),
            "work" => Ok(EmailType::Work),
            _ => Err(DataError::InvalidEnumValue {
                field: "email type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An email address of a person.
///
/// For privacy reasons the service sometimes returns only the MD5 of
/// the address; such fields are still searchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Email {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The address itself.
    pub address: Option<String>,
    /// MD5 hex digest of the address.
    pub address_md5: Option<String>,
    /// Classification of the address.
    pub email_type: Option<EmailType>,
    /// Whether this comes from a disposable email service.
    pub disposable: Option<bool>,
    /// Whether this is hosted by a public email provider (gmail, ...).
    pub email_provider: Option<bool>,
}

impl Email {
    /// Whether the address matches the basic email shape.
    pub fn is_valid_email(&self) -> bool {
        self.address.as_deref().is_some_and(|a| EMAIL_RE.is_match(a))
    }

    /// Whether the field can be searched by: a valid address, or a
    /// 32-character MD5 token.
    pub fn is_searchable(&self) -> bool {
        self.is_valid_email()
            || self
                .address_md5
                .as_deref()
                .is_some_and(|md5| md5.len() == 32)
    }

    /// The username part of the address, when the address is valid.
    pub fn username(&self) -> Option<&str> {
        if !self.is_valid_email() {
            return None;
        }
        self.address.as_deref().and_then(|a| a.split('@').next())
    }

    /// The domain part of the address, when the address is valid.
    pub fn domain(&self) -> Option<&str> {
        if !self.is_valid_email() {
            return None;
        }
        self.address.as_deref().and_then(|a| a.split('@').nth(1))
    }

    /// The display string: the address, or its MD5 when the address is
    /// withheld.
    pub fn display(&self) -> Option<String> {
        self.address.clone().or_else(|| self.address_md5.clone())
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "@type", self.email_type.map(EmailType::as_str));
        put_bool(&mut d, "@disposable", self.disposable);
        put_bool(&mut d, "@email_provider", self.email_provider);
        put_str(&mut d, "address", self.address.as_deref());
        put_str(&mut d, "address_md5", self.address_md5.as_deref());
        put_str(&mut d, "display", self.display().as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored; the
    /// `display` key is derived and therefore not stored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            address: r.get_str("address")?,
            address_md5: r.get_str("address_md5")?,
            email_type: r.get_enum("type")?,
            disposable: r.get_bool("disposable")?,
            email_provider: r.get_bool("email_provider")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(address: &str) -> Email {
        Email {
            address: Some(address.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_email_shapes() {
        assert!(email("clark.kent@example.com").is_valid_email());
        assert!(email("clark+kent@daily-planet.co.uk").is_valid_email());
        assert!(!email("not-an-email").is_valid_email());
        assert!(!email("missing@tld").is_valid_email());
    }

    #[test]
    fn test_searchable_by_address_or_md5() {
        assert!(email("clark.kent@example.com").is_searchable());
        assert!(!email("not-an-email").is_searchable());
        let md5_only = Email {
            address_md5: Some("a".repeat(32)),
            ..Default::default()
        };
        assert!(md5_only.is_searchable());
        let short_md5 = Email {
            address_md5: Some("a".repeat(31)),
            ..Default::default()
        };
        assert!(!short_md5.is_searchable());
    }

    #[test]
    fn test_username_and_domain_split() {
        let e = email("clark.kent@example.com");
        assert_eq!(e.username(), Some("clark.kent"));
        assert_eq!(e.domain(), Some("example.com"));
        assert_eq!(email("invalid").username(), None);
    }

    #[test]
    fn test_round_trip_with_derived_display() {
        let original = Email {
            address: Some("clark.kent@example.com".to_string()),
            email_type: Some(EmailType::Work),
            disposable: Some(false),
            ..Default::default()
        };
        let d = original.to_dict();
        assert_eq!(
            d.get("display"),
            Some(&Value::String("clark.kent@example.com".to_string()))
        );
        // False is meaningful and kept.
        assert_eq!(d.get("@disposable"), Some(&Value::Bool(false)));
        let decoded = Email::from_dict(&d).unwrap();
        assert_eq!(decoded, original);
    }
}
