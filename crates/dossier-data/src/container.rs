//! Typed storage for the fields carried by persons, sources and
//! relationships.
//!
//! Each container entity accepts a different subset of field kinds; the
//! subset is a static [`ContainerSchema`] shared by the add, encode and
//! decode paths so the three cannot drift apart. Within each slot,
//! field order is preserved exactly as added or received.

use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::error::DataError;
use crate::fields::{
    Address, Dob, Education, Email, Ethnicity, Field, FieldKind, Gender, Image, Job, Language,
    Name, OriginCountry, Phone, Tag, Url, UserId, Username,
};
use crate::relationship::Relationship;

/// The field kinds a container entity accepts, keyed by the entity's
/// wire name for error reporting.
#[derive(Debug)]
pub struct ContainerSchema {
    pub(crate) container: &'static str,
    pub(crate) plural: &'static [FieldKind],
    pub(crate) singular: &'static [FieldKind],
}

impl ContainerSchema {
    /// Whether this container accepts fields of the given kind.
    pub fn accepts(&self, kind: FieldKind) -> bool {
        self.plural.contains(&kind) || self.singular.contains(&kind)
    }
}

/// The typed field slots of a container entity.
///
/// Plural kinds accumulate in vectors; the singular gender and DOB
/// slots hold at most one value, with the last add winning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldsContainer {
    /// Names, in received order.
    pub names: Vec<Name>,
    /// Addresses, in received order.
    pub addresses: Vec<Address>,
    /// Phones, in received order.
    pub phones: Vec<Phone>,
    /// Emails, in received order.
    pub emails: Vec<Email>,
    /// Jobs, in received order.
    pub jobs: Vec<Job>,
    /// Educations, in received order.
    pub educations: Vec<Education>,
    /// Images, in received order.
    pub images: Vec<Image>,
    /// Usernames, in received order.
    pub usernames: Vec<Username>,
    /// User IDs, in received order.
    pub user_ids: Vec<UserId>,
    /// Languages, in received order.
    pub languages: Vec<Language>,
    /// Ethnicities, in received order.
    pub ethnicities: Vec<Ethnicity>,
    /// Origin countries, in received order.
    pub origin_countries: Vec<OriginCountry>,
    /// URLs, in received order.
    pub urls: Vec<Url>,
    /// Related persons, in received order.
    pub relationships: Vec<Relationship>,
    /// Tags, in received order.
    pub tags: Vec<Tag>,
    /// Gender. Singular slot.
    pub gender: Option<Gender>,
    /// Date of birth. Singular slot.
    pub dob: Option<Dob>,
}

impl FieldsContainer {
    /// Route a field into its slot, rejecting kinds the schema does not
    /// accept.
    pub fn add_field(&mut self, field: Field, schema: &ContainerSchema) -> Result<(), DataError> {
        if !schema.accepts(field.kind()) {
            return Err(DataError::UnsupportedField {
                kind: field.kind(),
                container: schema.container,
            });
        }
        match field {
            Field::Name(f) => self.names.push(f),
            Field::Address(f) => self.addresses.push(f),
            Field::Phone(f) => self.phones.push(f),
            Field::Email(f) => self.emails.push(f),
            Field::Job(f) => self.jobs.push(f),
            Field::Education(f) => self.educations.push(f),
            Field::Image(f) => self.images.push(f),
            Field::Username(f) => self.usernames.push(f),
            Field::UserId(f) => self.user_ids.push(f),
            Field::Language(f) => self.languages.push(f),
            Field::Ethnicity(f) => self.ethnicities.push(f),
            Field::OriginCountry(f) => self.origin_countries.push(f),
            Field::Url(f) => self.urls.push(f),
            Field::Relationship(f) => self.relationships.push(f),
            Field::Tag(f) => self.tags.push(f),
            Field::Gender(f) => self.gender = Some(f),
            Field::Dob(f) => self.dob = Some(f),
        }
        Ok(())
    }

    /// Route a batch of fields, stopping at the first rejected kind.
    pub fn add_fields(
        &mut self,
        fields: Vec<Field>,
        schema: &ContainerSchema,
    ) -> Result<(), DataError> {
        for field in fields {
            self.add_field(field, schema)?;
        }
        Ok(())
    }

    /// Every field held, plural slots first in declared order, then the
    /// singular gender and DOB. Order within each slot is preserved.
    pub fn all_fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        fields.extend(self.names.iter().cloned().map(Field::Name));
        fields.extend(self.addresses.iter().cloned().map(Field::Address));
        fields.extend(self.phones.iter().cloned().map(Field::Phone));
        fields.extend(self.emails.iter().cloned().map(Field::Email));
        fields.extend(self.jobs.iter().cloned().map(Field::Job));
        fields.extend(self.educations.iter().cloned().map(Field::Education));
        fields.extend(self.images.iter().cloned().map(Field::Image));
        fields.extend(self.usernames.iter().cloned().map(Field::Username));
        fields.extend(self.user_ids.iter().cloned().map(Field::UserId));
        fields.extend(self.languages.iter().cloned().map(Field::Language));
        fields.extend(self.ethnicities.iter().cloned().map(Field::Ethnicity));
        fields.extend(
            self.origin_countries
                .iter()
                .cloned()
                .map(Field::OriginCountry),
        );
        fields.extend(self.urls.iter().cloned().map(Field::Url));
        fields.extend(self.relationships.iter().cloned().map(Field::Relationship));
        fields.extend(self.tags.iter().cloned().map(Field::Tag));
        fields.extend(self.gender.iter().cloned().map(Field::Gender));
        fields.extend(self.dob.iter().cloned().map(Field::Dob));
        fields
    }

    /// Decode the field slots the schema names from a wire dict. Slots
    /// absent from the dict stay empty; unknown keys are ignored.
    pub fn fields_from_dict(
        d: &Map<String, Value>,
        schema: &ContainerSchema,
    ) -> Result<Self, DataError> {
        let mut container = Self::default();
        for &kind in schema.plural {
            match d.get(kind.slot_name()) {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for item in items {
                        let obj = item.as_object().ok_or_else(|| {
                            DataError::Decode(format!(
                                "{} items must be objects, got {item}",
                                kind.slot_name()
                            ))
                        })?;
                        container.add_field(Field::decode(kind, obj)?, schema)?;
                    }
                }
                Some(other) => {
                    return Err(DataError::Decode(format!(
                        "{} must be an array, got {other}",
                        kind.slot_name()
                    )));
                }
            }
        }
        for &kind in schema.singular {
            match d.get(kind.slot_name()) {
                None | Some(Value::Null) => {}
                Some(Value::Object(obj)) => {
                    container.add_field(Field::decode(kind, obj)?, schema)?;
                }
                Some(other) => {
                    return Err(DataError::Decode(format!(
                        "{} must be an object, got {other}",
                        kind.slot_name()
                    )));
                }
            }
        }
        Ok(container)
    }

    /// Encode the populated field slots into a wire dict.
    pub fn fields_to_dict(&self, d: &mut Map<String, Value>) {
        fn put_list(d: &mut Map<String, Value>, kind: FieldKind, dicts: Vec<Map<String, Value>>) {
            if !dicts.is_empty() {
                d.insert(
                    kind.slot_name().to_string(),
                    Value::Array(dicts.into_iter().map(Value::Object).collect()),
                );
            }
        }
        put_list(d, FieldKind::Name, self.names.iter().map(Name::to_dict).collect());
        put_list(
            d,
            FieldKind::Address,
            self.addresses.iter().map(Address::to_dict).collect(),
        );
        put_list(d, FieldKind::Phone, self.phones.iter().map(Phone::to_dict).collect());
        put_list(d, FieldKind::Email, self.emails.iter().map(Email::to_dict).collect());
        put_list(d, FieldKind::Job, self.jobs.iter().map(Job::to_dict).collect());
        put_list(
            d,
            FieldKind::Education,
            self.educations.iter().map(Education::to_dict).collect(),
        );
        put_list(d, FieldKind::Image, self.images.iter().map(Image::to_dict).collect());
        put_list(
            d,
            FieldKind::Username,
            self.usernames.iter().map(Username::to_dict).collect(),
        );
        put_list(
            d,
            FieldKind::UserId,
            self.user_ids.iter().map(UserId::to_dict).collect(),
        );
        put_list(
            d,
            FieldKind::Language,
            self.languages.iter().map(Language::to_dict).collect(),
        );
        put_list(
            d,
            FieldKind::Ethnicity,
            self.ethnicities.iter().map(Ethnicity::to_dict).collect(),
        );
        put_list(
            d,
            FieldKind::OriginCountry,
            self.origin_countries
                .iter()
                .map(OriginCountry::to_dict)
                .collect(),
        );
        put_list(d, FieldKind::Url, self.urls.iter().map(Url::to_dict).collect());
        put_list(
            d,
            FieldKind::Relationship,
            self.relationships
                .iter()
                .map(DictSerializable::to_dict)
                .collect(),
        );
        put_list(d, FieldKind::Tag, self.tags.iter().map(Tag::to_dict).collect());
        if let Some(gender) = &self.gender {
            d.insert(
                FieldKind::Gender.slot_name().to_string(),
                Value::Object(gender.to_dict()),
            );
        }
        if let Some(dob) = &self.dob {
            d.insert(
                FieldKind::Dob.slot_name().to_string(),
                Value::Object(dob.to_dict()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES_ONLY: ContainerSchema = ContainerSchema {
        container: "test",
        plural: &[FieldKind::Name],
        singular: &[FieldKind::Gender],
    };

    #[test]
    fn test_rejected_kind_names_the_container() {
        let mut container = FieldsContainer::default();
        let err = container
            .add_field(Field::Phone(Phone::default()), &NAMES_ONLY)
            .unwrap_err();
        assert_eq!(err.to_string(), "test does not accept phone fields");
    }

    #[test]
    fn test_order_is_preserved_within_a_slot() {
        let mut container = FieldsContainer::default();
        for first in ["Clark", "Kal", "Superman"] {
            container
                .add_field(
                    Field::Name(Name {
                        first: Some(first.to_string()),
                        ..Default::default()
                    }),
                    &NAMES_ONLY,
                )
                .unwrap();
        }
        let firsts: Vec<_> = container
            .names
            .iter()
            .map(|n| n.first.clone().unwrap())
            .collect();
        assert_eq!(firsts, ["Clark", "Kal", "Superman"]);
    }

    #[test]
    fn test_singular_slot_keeps_the_last_value() {
        use crate::fields::GenderValue;
        let mut container = FieldsContainer::default();
        for value in [GenderValue::Female, GenderValue::Male] {
            container
                .add_field(
                    Field::Gender(Gender {
                        content: Some(value),
                        ..Default::default()
                    }),
                    &NAMES_ONLY,
                )
                .unwrap();
        }
        assert_eq!(container.gender.unwrap().content, Some(GenderValue::Male));
    }

    #[test]
    fn test_all_fields_yields_plural_then_singular() {
        let mut container = FieldsContainer::default();
        container
            .add_fields(
                vec![
                    Field::Name(Name {
                        first: Some("Clark".to_string()),
                        ..Default::default()
                    }),
                    Field::Gender(Gender::default()),
                ],
                &NAMES_ONLY,
            )
            .unwrap();
        let kinds: Vec<_> = container.all_fields().iter().map(Field::kind).collect();
        assert_eq!(kinds, [FieldKind::Name, FieldKind::Gender]);
    }

    #[test]
    fn test_decode_ignores_slots_outside_the_schema() {
        let json = r#"{
            "names": [{"first": "Clark", "last": "Kent"}],
            "phones": [{"number": 9998887777}]
        }"#;
        let value: Value = serde_json::from_str(json).unwrap();
        let container =
            FieldsContainer::fields_from_dict(value.as_object().unwrap(), &NAMES_ONLY).unwrap();
        assert_eq!(container.names.len(), 1);
        assert!(container.phones.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array_slot() {
        let json = r#"{"names": {"first": "Clark"}}"#;
        let value: Value = serde_json::from_str(json).unwrap();
        assert!(FieldsContainer::fields_from_dict(value.as_object().unwrap(), &NAMES_ONLY).is_err());
    }
}
