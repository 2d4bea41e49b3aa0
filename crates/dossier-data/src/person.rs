//! A person, either as a search query or as response data.

use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::container::{ContainerSchema, FieldsContainer};
use crate::error::DataError;
use crate::fields::{put_bool, put_f64, put_str, DictReader, Field, FieldKind};

/// The field kinds a person accepts. Tags belong to sources only.
pub const PERSON_SCHEMA: ContainerSchema = ContainerSchema {
    container: "person",
    plural: &[
        FieldKind::Name,
        FieldKind::Address,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Job,
        FieldKind::Education,
        FieldKind::Image,
        FieldKind::Username,
        FieldKind::UserId,
        FieldKind::Language,
        FieldKind::Ethnicity,
        FieldKind::OriginCountry,
        FieldKind::Url,
        FieldKind::Relationship,
    ],
    singular: &[FieldKind::Gender, FieldKind::Dob],
};

/// A person: the query side of a search, a matched response person, or
/// a possible match.
///
/// A response person carries an `@id` once the service has a confident
/// identity, and a `@search_pointer` that can be fed back to the
/// service to continue a search from a possible match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    /// The fields known about the person.
    pub fields: FieldsContainer,
    /// Identifier of the person in the service's index.
    pub person_id: Option<String>,
    /// Opaque token for follow-up searches.
    pub search_pointer: Option<String>,
    /// How well this person matches the query, 0 to 1.
    pub match_score: Option<f64>,
    /// Whether parts of this person were statistically inferred.
    pub inferred: Option<bool>,
}

impl Person {
    /// A person built from query fields.
    pub fn from_fields(fields: Vec<Field>) -> Result<Self, DataError> {
        let mut person = Self::default();
        person.add_fields(fields)?;
        Ok(person)
    }

    /// Route a batch of fields into the person's container.
    pub fn add_fields(&mut self, fields: Vec<Field>) -> Result<(), DataError> {
        self.fields.add_fields(fields, &PERSON_SCHEMA)
    }

    /// Every field known about the person.
    pub fn all_fields(&self) -> Vec<Field> {
        self.fields.all_fields()
    }

    /// Whether the person carries enough to be used as a search query:
    /// a search pointer, a searchable name, email, phone, username,
    /// user ID or URL, or an address that is searchable on its own.
    pub fn is_searchable(&self) -> bool {
        self.search_pointer.as_deref().is_some_and(|p| !p.is_empty())
            || self.fields.names.iter().any(|f| f.is_searchable())
            || self.fields.emails.iter().any(|f| f.is_searchable())
            || self.fields.phones.iter().any(|f| f.is_searchable())
            || self.fields.usernames.iter().any(|f| f.is_searchable())
            || self.fields.user_ids.iter().any(|f| f.is_searchable())
            || self.fields.urls.iter().any(|f| f.is_searchable())
            || self.fields.addresses.iter().any(|f| f.is_sole_searchable())
    }

    /// The query fields that do not meet their searchability rule.
    /// Useful for warning a user before a search is sent.
    pub fn unsearchable_fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        fields.extend(
            self.fields
                .names
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::Name),
        );
        fields.extend(
            self.fields
                .emails
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::Email),
        );
        fields.extend(
            self.fields
                .phones
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::Phone),
        );
        fields.extend(
            self.fields
                .usernames
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::Username),
        );
        fields.extend(
            self.fields
                .user_ids
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::UserId),
        );
        fields.extend(
            self.fields
                .urls
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::Url),
        );
        fields.extend(
            self.fields
                .addresses
                .iter()
                .filter(|f| !f.is_searchable())
                .cloned()
                .map(Field::Address),
        );
        if let Some(dob) = &self.fields.dob {
            if !dob.is_searchable() {
                fields.push(Field::Dob(dob.clone()));
            }
        }
        fields
    }
}

impl DictSerializable for Person {
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        put_str(&mut d, "@id", self.person_id.as_deref());
        put_str(&mut d, "@search_pointer", self.search_pointer.as_deref());
        put_f64(&mut d, "@match", self.match_score);
        put_bool(&mut d, "@inferred", self.inferred);
        self.fields.fields_to_dict(&mut d);
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            fields: FieldsContainer::fields_from_dict(d, &PERSON_SCHEMA)?,
            person_id: r.get_str("id")?,
            search_pointer: r.get_str("search_pointer")?,
            match_score: r.get_f64("match")?,
            inferred: r.get_bool("inferred")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Email, Name, Phone, Tag, Username};

    fn name(first: &str, last: &str) -> Field {
        Field::Name(Name {
            first: Some(first.to_string()),
            last: Some(last.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_tags_are_rejected() {
        let err = Person::from_fields(vec![Field::Tag(Tag::default())]).unwrap_err();
        assert_eq!(err.to_string(), "person does not accept tag fields");
    }

    #[test]
    fn test_searchable_by_a_single_good_field() {
        let person = Person::from_fields(vec![name("Clark", "Kent")]).unwrap();
        assert!(person.is_searchable());
        let person = Person::from_fields(vec![Field::Email(Email {
            address: Some("clark.kent@example.com".to_string()),
            ..Default::default()
        })])
        .unwrap();
        assert!(person.is_searchable());
    }

    #[test]
    fn test_search_pointer_alone_is_searchable() {
        let person = Person {
            search_pointer: Some("b4a0c70a".to_string()),
            ..Default::default()
        };
        assert!(person.is_searchable());
        assert!(!Person::default().is_searchable());
    }

    #[test]
    fn test_unsearchable_fields_are_reported_in_slot_order() {
        let person = Person::from_fields(vec![
            Field::Username(Username {
                content: Some("abc".to_string()),
                ..Default::default()
            }),
            name("A", "K"),
            Field::Phone(Phone {
                number: Some(9998887777),
                ..Default::default()
            }),
        ])
        .unwrap();
        assert!(!person.is_searchable());
        let kinds: Vec<_> = person
            .unsearchable_fields()
            .iter()
            .map(Field::kind)
            .collect();
        assert_eq!(kinds, [FieldKind::Name, FieldKind::Phone, FieldKind::Username]);
    }

    #[test]
    fn test_round_trip_keeps_attributes_and_fields() {
        let mut person = Person {
            person_id: Some("b4a0c70a-d2cf".to_string()),
            match_score: Some(0.82),
            ..Default::default()
        };
        person
            .add_fields(vec![name("Clark", "Kent"), name("Kal", "El")])
            .unwrap();
        let d = person.to_dict();
        assert!(d.contains_key("@id"));
        assert!(d.contains_key("@match"));
        let decoded = Person::from_dict(&d).unwrap();
        assert_eq!(decoded, person);
    }
}
