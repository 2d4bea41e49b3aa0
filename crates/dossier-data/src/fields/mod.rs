//! Field types - one typed, self-contained datum about a person.
//!
//! Every field variant embeds a shared [`FieldBase`] (validity window,
//! inference flag) and implements the same dict protocol: metadata
//! attributes are serialized under reserved `@`-prefixed keys, payload
//! children under plain keys, and only populated values are emitted.
//! Falsy-but-meaningful booleans and integers (`false`, `0`) are kept;
//! empty strings and absent values are dropped.

pub mod address;
pub mod dob;
pub mod education;
pub mod email;
pub mod ethnicity;
pub mod gender;
pub mod image;
pub mod job;
pub mod language;
pub mod name;
pub mod origin_country;
pub mod phone;
pub mod tag;
pub mod url;
pub mod user_id;
pub mod username;

pub use address::{Address, AddressSearchRule, AddressType, DEFAULT_ADDRESS_SEARCH_RULE};
pub use dob::Dob;
pub use education::Education;
pub use email::{Email, EmailType};
pub use ethnicity::Ethnicity;
pub use gender::{Gender, GenderValue};
pub use image::Image;
pub use job::Job;
pub use language::Language;
pub use name::{Name, NameType};
pub use origin_country::OriginCountry;
pub use phone::{Phone, PhoneType};
pub use tag::Tag;
pub use url::{Url, UrlCategory};
pub use user_id::UserId;
pub use username::Username;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::codec::{format_date, parse_date, DictSerializable};
use crate::date_range::DateRange;
use crate::error::DataError;
use crate::relationship::Relationship;

/// Attributes shared by every field variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldBase {
    /// When this datum was first seen by the service's crawlers.
    pub valid_since: Option<NaiveDate>,
    /// Whether the datum was statistically inferred rather than observed.
    pub inferred: Option<bool>,
    /// When this datum was last seen by the service's crawlers.
    pub last_seen: Option<NaiveDate>,
    /// Whether the datum is believed valid at query time.
    pub current: Option<bool>,
}

impl FieldBase {
    pub(crate) fn encode_into(&self, d: &mut Map<String, Value>) {
        put_date(d, "@valid_since", self.valid_since);
        put_bool(d, "@inferred", self.inferred);
        put_date(d, "@last_seen", self.last_seen);
        put_bool(d, "@current", self.current);
    }

    pub(crate) fn decode(r: &DictReader<'_>) -> Result<Self, DataError> {
        Ok(Self {
            valid_since: r.get_date("valid_since")?,
            inferred: r.get_bool("inferred")?,
            last_seen: r.get_date("last_seen")?,
            current: r.get_bool("current")?,
        })
    }
}

/// The closed set of field kinds, used as the registry key for
/// container slot dispatch. Encode and decode share this table, so the
/// two paths cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A person's name.
    Name,
    /// A postal address.
    Address,
    /// A phone number.
    Phone,
    /// An email address.
    Email,
    /// Employment information.
    Job,
    /// Education information.
    Education,
    /// An image URL.
    Image,
    /// A screen name.
    Username,
    /// A site-scoped unique identifier.
    UserId,
    /// A language familiarity.
    Language,
    /// An ethnicity.
    Ethnicity,
    /// A country of origin.
    OriginCountry,
    /// A related URL.
    Url,
    /// A related person.
    Relationship,
    /// A free-form classified string.
    Tag,
    /// A gender. Singular slot.
    Gender,
    /// A date of birth. Singular slot.
    Dob,
}

impl FieldKind {
    /// The wire key of this kind's container slot.
    pub fn slot_name(&self) -> &'static str {
        match self {
            FieldKind::Name => "names",
            FieldKind::Address => "addresses",
            FieldKind::Phone => "phones",
            FieldKind::Email => "emails",
            FieldKind::Job => "jobs",
            FieldKind::Education => "educations",
            FieldKind::Image => "images",
            FieldKind::Username => "usernames",
            FieldKind::UserId => "user_ids",
            FieldKind::Language => "languages",
            FieldKind::Ethnicity => "ethnicities",
            FieldKind::OriginCountry => "origin_countries",
            FieldKind::Url => "urls",
            FieldKind::Relationship => "relationships",
            FieldKind::Tag => "tags",
            FieldKind::Gender => "gender",
            FieldKind::Dob => "dob",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Name => "name",
            FieldKind::Address => "address",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Job => "job",
            FieldKind::Education => "education",
            FieldKind::Image => "image",
            FieldKind::Username => "username",
            FieldKind::UserId => "user_id",
            FieldKind::Language => "language",
            FieldKind::Ethnicity => "ethnicity",
            FieldKind::OriginCountry => "origin_country",
            FieldKind::Url => "url",
            FieldKind::Relationship => "relationship",
            FieldKind::Tag => "tag",
            FieldKind::Gender => "gender",
            FieldKind::Dob => "dob",
        };
        f.write_str(name)
    }
}

/// A single field of any kind.
///
/// This is the unit accepted by container `add_fields` calls and
/// yielded by `all_fields`. Each variant wraps the concrete field
/// struct.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// A person's name.
    Name(Name),
    /// A postal address.
    Address(Address),
    /// A phone number.
    Phone(Phone),
    /// An email address.
    Email(Email),
    /// Employment information.
    Job(Job),
    /// Education information.
    Education(Education),
    /// An image URL.
    Image(Image),
    /// A screen name.
    Username(Username),
    /// A site-scoped unique identifier.
    UserId(UserId),
    /// A language familiarity.
    Language(Language),
    /// An ethnicity.
    Ethnicity(Ethnicity),
    /// A country of origin.
    OriginCountry(OriginCountry),
    /// A related URL.
    Url(Url),
    /// A related person.
    Relationship(Relationship),
    /// A free-form classified string.
    Tag(Tag),
    /// A gender.
    Gender(Gender),
    /// A date of birth.
    Dob(Dob),
}

impl Field {
    /// The registry kind of this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Name(_) => FieldKind::Name,
            Field::Address(_) => FieldKind::Address,
            Field::Phone(_) => FieldKind::Phone,
            Field::Email(_) => FieldKind::Email,
            Field::Job(_) => FieldKind::Job,
            Field::Education(_) => FieldKind::Education,
            Field::Image(_) => FieldKind::Image,
            Field::Username(_) => FieldKind::Username,
            Field::UserId(_) => FieldKind::UserId,
            Field::Language(_) => FieldKind::Language,
            Field::Ethnicity(_) => FieldKind::Ethnicity,
            Field::OriginCountry(_) => FieldKind::OriginCountry,
            Field::Url(_) => FieldKind::Url,
            Field::Relationship(_) => FieldKind::Relationship,
            Field::Tag(_) => FieldKind::Tag,
            Field::Gender(_) => FieldKind::Gender,
            Field::Dob(_) => FieldKind::Dob,
        }
    }

    /// The human-readable display string of the wrapped field, when one
    /// is stored or derivable.
    pub fn display(&self) -> Option<String> {
        match self {
            Field::Name(f) => f.display.clone(),
            Field::Address(f) => f.display.clone(),
            Field::Phone(f) => f.display.clone(),
            Field::Email(f) => f.display(),
            Field::Job(f) => f.display.clone(),
            Field::Education(f) => f.display.clone(),
            Field::Image(f) => f.url.clone(),
            Field::Username(f) => f.content.clone(),
            Field::UserId(f) => f.content.clone(),
            Field::Language(f) => f.display.clone(),
            Field::Ethnicity(f) => f.display(),
            Field::OriginCountry(f) => f.display().map(str::to_string),
            Field::Url(f) => f.display(),
            Field::Relationship(f) => f.display(),
            Field::Tag(f) => f.content.clone(),
            Field::Gender(f) => f.display(),
            Field::Dob(f) => f.display.clone(),
        }
    }

    /// Encode the wrapped field into its wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        match self {
            Field::Name(f) => f.to_dict(),
            Field::Address(f) => f.to_dict(),
            Field::Phone(f) => f.to_dict(),
            Field::Email(f) => f.to_dict(),
            Field::Job(f) => f.to_dict(),
            Field::Education(f) => f.to_dict(),
            Field::Image(f) => f.to_dict(),
            Field::Username(f) => f.to_dict(),
            Field::UserId(f) => f.to_dict(),
            Field::Language(f) => f.to_dict(),
            Field::Ethnicity(f) => f.to_dict(),
            Field::OriginCountry(f) => f.to_dict(),
            Field::Url(f) => f.to_dict(),
            Field::Relationship(f) => f.to_dict(),
            Field::Tag(f) => f.to_dict(),
            Field::Gender(f) => f.to_dict(),
            Field::Dob(f) => f.to_dict(),
        }
    }

    /// Decode a field of the given kind from its wire dict.
    pub fn decode(kind: FieldKind, d: &Map<String, Value>) -> Result<Self, DataError> {
        Ok(match kind {
            FieldKind::Name => Field::Name(Name::from_dict(d)?),
            FieldKind::Address => Field::Address(Address::from_dict(d)?),
            FieldKind::Phone => Field::Phone(Phone::from_dict(d)?),
            FieldKind::Email => Field::Email(Email::from_dict(d)?),
            FieldKind::Job => Field::Job(Job::from_dict(d)?),
            FieldKind::Education => Field::Education(Education::from_dict(d)?),
            FieldKind::Image => Field::Image(Image::from_dict(d)?),
            FieldKind::Username => Field::Username(Username::from_dict(d)?),
            FieldKind::UserId => Field::UserId(UserId::from_dict(d)?),
            FieldKind::Language => Field::Language(Language::from_dict(d)?),
            FieldKind::Ethnicity => Field::Ethnicity(Ethnicity::from_dict(d)?),
            FieldKind::OriginCountry => Field::OriginCountry(OriginCountry::from_dict(d)?),
            FieldKind::Url => Field::Url(Url::from_dict(d)?),
            FieldKind::Relationship => Field::Relationship(Relationship::from_dict(d)?),
            FieldKind::Tag => Field::Tag(Tag::from_dict(d)?),
            FieldKind::Gender => Field::Gender(Gender::from_dict(d)?),
            FieldKind::Dob => Field::Dob(Dob::from_dict(d)?),
        })
    }
}

macro_rules! impl_from_field {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl From<$ty> for Field {
            fn from(f: $ty) -> Self {
                Field::$variant(f)
            }
        })*
    };
}

impl_from_field! {
    Name => Name,
    Address => Address,
    Phone => Phone,
    Email => Email,
    Job => Job,
    Education => Education,
    Image => Image,
    Username => Username,
    UserId => UserId,
    Language => Language,
    Ethnicity => Ethnicity,
    OriginCountry => OriginCountry,
    Url => Url,
    Relationship => Relationship,
    Tag => Tag,
    Gender => Gender,
    Dob => Dob,
}

// --- encode helpers -----------------------------------------------------

pub(crate) fn put_str(d: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        if !v.is_empty() {
            d.insert(key.to_string(), Value::String(v.to_string()));
        }
    }
}

pub(crate) fn put_bool(d: &mut Map<String, Value>, key: &str, value: Option<bool>) {
    if let Some(v) = value {
        d.insert(key.to_string(), Value::Bool(v));
    }
}

pub(crate) fn put_i64(d: &mut Map<String, Value>, key: &str, value: Option<i64>) {
    if let Some(v) = value {
        d.insert(key.to_string(), Value::Number(v.into()));
    }
}

pub(crate) fn put_f64(d: &mut Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        if let Some(n) = serde_json::Number::from_f64(v) {
            d.insert(key.to_string(), Value::Number(n));
        }
    }
}

pub(crate) fn put_date(d: &mut Map<String, Value>, key: &str, value: Option<NaiveDate>) {
    if let Some(v) = value {
        d.insert(key.to_string(), Value::String(format_date(v)));
    }
}

pub(crate) fn put_dict(d: &mut Map<String, Value>, key: &str, value: Option<Map<String, Value>>) {
    if let Some(v) = value {
        d.insert(key.to_string(), Value::Object(v));
    }
}

// --- decode helper ------------------------------------------------------

/// Read-side view over a wire dict. Keys may appear with or without the
/// reserved `@` prefix; unknown keys are simply never read, which gives
/// forward compatibility with server-added fields.
pub(crate) struct DictReader<'a> {
    d: &'a Map<String, Value>,
}

impl<'a> DictReader<'a> {
    pub(crate) fn new(d: &'a Map<String, Value>) -> Self {
        Self { d }
    }

    fn value(&self, key: &str) -> Option<&'a Value> {
        self.d
            .get(key)
            .or_else(|| self.d.get(&format!("@{key}")))
            .filter(|v| !v.is_null())
    }

    pub(crate) fn get_str(&self, key: &str) -> Result<Option<String>, DataError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(DataError::Decode(format!(
                "{key} must be a string, got {other}"
            ))),
        }
    }

    pub(crate) fn get_bool(&self, key: &str) -> Result<Option<bool>, DataError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(DataError::Decode(format!(
                "{key} must be a boolean, got {other}"
            ))),
        }
    }

    pub(crate) fn get_i64(&self, key: &str) -> Result<Option<i64>, DataError> {
        match self.value(key) {
            None => Ok(None),
            Some(v) => v.as_i64().map(Some).ok_or_else(|| {
                DataError::Decode(format!("{key} must be an integer, got {v}"))
            }),
        }
    }

    pub(crate) fn get_f64(&self, key: &str) -> Result<Option<f64>, DataError> {
        match self.value(key) {
            None => Ok(None),
            Some(v) => v
                .as_f64()
                .map(Some)
                .ok_or_else(|| DataError::Decode(format!("{key} must be a number, got {v}"))),
        }
    }

    pub(crate) fn get_date(&self, key: &str) -> Result<Option<NaiveDate>, DataError> {
        match self.get_str(key)? {
            Some(s) => Ok(Some(parse_date(&s)?)),
            None => Ok(None),
        }
    }

    pub(crate) fn get_date_range(&self, key: &str) -> Result<Option<DateRange>, DataError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Object(o)) => Ok(Some(DateRange::from_dict(o)?)),
            Some(other) => Err(DataError::Decode(format!(
                "{key} must be an object, got {other}"
            ))),
        }
    }

    pub(crate) fn get_enum<T>(&self, key: &str) -> Result<Option<T>, DataError>
    where
        T: FromStr<Err = DataError>,
    {
        match self.get_str(key)? {
            Some(s) => T::from_str(&s).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_accepts_prefixed_and_plain_keys() {
        let mut d = Map::new();
        d.insert("@type".to_string(), Value::String("work".to_string()));
        d.insert("city".to_string(), Value::String("Metropolis".to_string()));
        let r = DictReader::new(&d);
        assert_eq!(r.get_str("type").unwrap(), Some("work".to_string()));
        assert_eq!(r.get_str("city").unwrap(), Some("Metropolis".to_string()));
        assert_eq!(r.get_str("state").unwrap(), None);
    }

    #[test]
    fn test_reader_rejects_wrong_shapes() {
        let mut d = Map::new();
        d.insert("first".to_string(), Value::Number(7.into()));
        let r = DictReader::new(&d);
        assert!(r.get_str("first").is_err());
    }

    #[test]
    fn test_base_attributes_round_trip() {
        let base = FieldBase {
            valid_since: Some(chrono::NaiveDate::from_ymd_opt(2015, 3, 1).unwrap()),
            inferred: Some(false),
            last_seen: None,
            current: Some(true),
        };
        let mut d = Map::new();
        base.encode_into(&mut d);
        // False is meaningful and must be kept on the wire.
        assert_eq!(d.get("@inferred"), Some(&Value::Bool(false)));
        assert!(!d.contains_key("@last_seen"));
        let decoded = FieldBase::decode(&DictReader::new(&d)).unwrap();
        assert_eq!(decoded, base);
    }

    #[test]
    fn test_empty_strings_are_omitted() {
        let mut d = Map::new();
        put_str(&mut d, "raw", Some(""));
        put_str(&mut d, "city", None);
        put_i64(&mut d, "number", Some(0));
        assert!(d.get("raw").is_none());
        assert!(d.get("city").is_none());
        // Integer zero is meaningful and kept.
        assert_eq!(d.get("number"), Some(&Value::Number(0.into())));
    }
}
