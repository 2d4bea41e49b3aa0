//! End-to-end tests over the dict/JSON protocol.

use chrono::Datelike;
use dossier_data::fields::{Dob, Email, Field, Name, Phone, Tag, Username};
use dossier_data::{DataError, DictSerializable, FieldKind, Person, Source};

const RESPONSE_PERSON: &str = r#"{
    "@id": "b4a0c70a-d2cf-48e4-8c55-823f3a7b32e5",
    "@match": 1.0,
    "names": [
        {"@type": "present", "first": "Clark", "middle": "Joseph", "last": "Kent",
         "display": "Clark Joseph Kent"},
        {"@type": "alias", "first": "Kal", "last": "El", "display": "Kal El"}
    ],
    "emails": [
        {"@type": "work", "@email_provider": false,
         "address": "clark.kent@thedailyplanet.com",
         "address_md5": "999e509752141a0ee42ff455529c10fc"}
    ],
    "phones": [
        {"@type": "home_phone", "country_code": 1, "number": 9785550145,
         "display": "(978) 555-0145"}
    ],
    "addresses": [
        {"@type": "home", "@valid_since": "2005-02-12", "country": "US",
         "state": "KS", "city": "Smallville", "street": "Hickory Lane",
         "house": "10", "display": "10 Hickory Lane, Smallville, Kansas"}
    ],
    "jobs": [
        {"title": "Field Reporter", "organization": "The Daily Planet",
         "industry": "Journalism",
         "date_range": {"start": "2009-12-08", "end": "2012-10-09"}}
    ],
    "gender": {"content": "male"},
    "dob": {"date_range": {"start": "1986-01-01", "end": "1987-05-13"},
            "display": "32 years old"},
    "usernames": [{"content": "superman"}],
    "user_ids": [{"content": "11231@facebook"}],
    "relationships": [
        {"@type": "family", "@subtype": "Adoptive father",
         "names": [{"first": "Jonathan", "last": "Kent",
                    "display": "Jonathan Kent"}]}
    ],
    "urls": [
        {"@category": "professional_and_business", "@domain": "linkedin.com",
         "@name": "LinkedIn", "url": "https://linkedin.com/clark.kent"}
    ]
}"#;

#[test]
fn test_response_person_decodes_completely() {
    let person = Person::from_json(RESPONSE_PERSON).unwrap();
    assert_eq!(
        person.person_id.as_deref(),
        Some("b4a0c70a-d2cf-48e4-8c55-823f3a7b32e5")
    );
    assert_eq!(person.match_score, Some(1.0));
    assert_eq!(person.fields.names.len(), 2);
    assert_eq!(person.fields.names[0].first.as_deref(), Some("Clark"));
    assert_eq!(person.fields.names[1].first.as_deref(), Some("Kal"));
    assert_eq!(
        person.fields.emails[0].address.as_deref(),
        Some("clark.kent@thedailyplanet.com")
    );
    assert_eq!(person.fields.phones[0].country_code, Some(1));
    assert_eq!(person.fields.addresses[0].state_full(), Some("Kansas"));
    assert_eq!(
        person.fields.jobs[0].organization.as_deref(),
        Some("The Daily Planet")
    );
    assert!(person.fields.gender.is_some());
    assert!(person.fields.dob.as_ref().unwrap().is_searchable());
    assert_eq!(
        person.fields.relationships[0].display().as_deref(),
        Some("Jonathan Kent")
    );
    assert_eq!(person.fields.urls[0].domain.as_deref(), Some("linkedin.com"));
}

#[test]
fn test_response_person_round_trips() {
    let person = Person::from_json(RESPONSE_PERSON).unwrap();
    let restored = Person::from_json(&person.to_json()).unwrap();
    assert_eq!(restored, person);
}

#[test]
fn test_field_order_survives_the_round_trip() {
    let person = Person::from_json(RESPONSE_PERSON).unwrap();
    let restored = Person::from_json(&person.to_json()).unwrap();
    let firsts = |p: &Person| -> Vec<String> {
        p.fields
            .names
            .iter()
            .map(|n| n.first.clone().unwrap())
            .collect()
    };
    assert_eq!(firsts(&restored), firsts(&person));
    assert_eq!(firsts(&person), ["Clark", "Kal"]);
}

#[test]
fn test_all_fields_covers_every_slot() {
    let person = Person::from_json(RESPONSE_PERSON).unwrap();
    let kinds: Vec<_> = person.all_fields().iter().map(Field::kind).collect();
    assert_eq!(kinds.iter().filter(|k| **k == FieldKind::Name).count(), 2);
    assert!(kinds.contains(&FieldKind::Relationship));
    assert!(kinds.contains(&FieldKind::Gender));
    assert!(kinds.contains(&FieldKind::Dob));
    // Plural slots come before the singular gender and dob.
    assert_eq!(kinds.last(), Some(&FieldKind::Dob));
}

#[test]
fn test_person_rejects_tags_but_source_accepts_them() {
    let tag = Field::Tag(Tag {
        content: Some("journalist".to_string()),
        ..Default::default()
    });
    let err = Person::default().add_fields(vec![tag.clone()]).unwrap_err();
    assert!(matches!(
        err,
        DataError::UnsupportedField {
            kind: FieldKind::Tag,
            ..
        }
    ));
    let mut source = Source::default();
    source.add_fields(vec![tag]).unwrap();
    assert_eq!(source.fields.tags[0].content.as_deref(), Some("journalist"));
}

#[test]
fn test_searchability_of_a_built_up_query() {
    let mut person = Person::default();
    person
        .add_fields(vec![Field::Username(Username {
            content: Some("abc".to_string()),
            ..Default::default()
        })])
        .unwrap();
    assert!(!person.is_searchable());
    person
        .add_fields(vec![Field::Email(Email {
            address: Some("clark.kent@example.com".to_string()),
            ..Default::default()
        })])
        .unwrap();
    assert!(person.is_searchable());
    assert_eq!(person.unsearchable_fields().len(), 1);
}

#[test]
fn test_unsearchable_phone_is_reported() {
    let mut person = Person::default();
    person
        .add_fields(vec![Field::Phone(Phone {
            number: Some(9785550145),
            ..Default::default()
        })])
        .unwrap();
    let unsearchable = person.unsearchable_fields();
    assert_eq!(unsearchable.len(), 1);
    assert_eq!(unsearchable[0].kind(), FieldKind::Phone);
}

#[test]
fn test_dob_age_math_from_birth_year() {
    let dob = Dob::from_birth_year(2000).unwrap();
    let today = chrono::Local::now().date_naive();
    let age = dob.age().unwrap();
    // The range middle falls mid-2000, so the age is off by at most one
    // from the calendar difference.
    assert!((age - (today.year() - 2000)).abs() <= 1);
}

#[test]
fn test_decoding_garbage_json_fails_cleanly() {
    assert!(matches!(
        Person::from_json("not json"),
        Err(DataError::Json(_))
    ));
    assert!(matches!(
        Person::from_json("[1, 2, 3]"),
        Err(DataError::Decode(_))
    ));
}

#[test]
fn test_invalid_enum_in_a_nested_field_fails_the_decode() {
    let json = r#"{"names": [{"@type": "nickname", "first": "Clark"}]}"#;
    assert!(matches!(
        Person::from_json(json),
        Err(DataError::InvalidEnumValue { .. })
    ));
}

#[test]
fn test_unknown_top_level_keys_are_ignored() {
    let json = r#"{"names": [{"first": "Clark", "last": "Kent"}],
                   "@server_flag": true, "future_slot": [1, 2]}"#;
    let person = Person::from_json(json).unwrap();
    assert_eq!(person.fields.names.len(), 1);
}

#[test]
fn test_source_with_person_name_round_trips() {
    let mut source = Source {
        name: Some("LinkedIn".to_string()),
        category: Some("professional_and_business".to_string()),
        origin_url: Some("https://linkedin.com/clark.kent".to_string()),
        domain: Some("linkedin.com".to_string()),
        source_id: Some("edc6aa8fa3f211cfff9240b27864".to_string()),
        premium: Some(false),
        match_score: Some(0.93),
        ..Default::default()
    };
    source
        .add_fields(vec![Field::Name(Name {
            first: Some("Clark".to_string()),
            last: Some("Kent".to_string()),
            ..Default::default()
        })])
        .unwrap();
    let d = source.to_dict();
    // premium=false is dropped on the wire.
    assert!(!d.contains_key("@premium"));
    let decoded = Source::from_dict(&d).unwrap();
    assert_eq!(decoded.name, source.name);
    assert_eq!(decoded.premium, None);
    assert_eq!(decoded.fields, source.fields);
}
