//! A person related to the person a record describes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::container::{ContainerSchema, FieldsContainer};
use crate::error::DataError;
use crate::fields::{put_bool, put_date, put_str, DictReader, Field, FieldKind};

/// Classification of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    /// A friend.
    Friend,
    /// A family member.
    Family,
    /// A colleague.
    Work,
    /// Any other relation.
    Other,
}

impl RelationshipType {
    /// The wire value of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::Friend => "friend",
            RelationshipType::Family => "family",
            RelationshipType::Work => "work",
            RelationshipType::Other => "other",
        }
    }
}

impl FromStr for RelationshipType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "friend" => Ok(RelationshipType::Friend),
            "family" => Ok(RelationshipType::Family),
            "work" => Ok(RelationshipType::Work),
            "other" => Ok(RelationshipType::Other),
            _ => Err(DataError::InvalidEnumValue {
                field: "relationship type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Another person related to the person a record describes, itself a
/// field container. Relationships do not nest: a related person cannot
/// carry relationships (or tags) of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationship {
    /// The fields known about the related person.
    pub fields: FieldsContainer,
    /// Classification of the relation.
    pub rel_type: Option<RelationshipType>,
    /// Free-text refinement of the type, e.g. "Father".
    pub subtype: Option<String>,
    /// When this relation was first seen by the service's crawlers.
    pub valid_since: Option<NaiveDate>,
    /// Whether the relation was statistically inferred.
    pub inferred: Option<bool>,
}

/// The field kinds a relationship accepts.
pub const RELATIONSHIP_SCHEMA: ContainerSchema = ContainerSchema {
    container: "relationship",
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
    ],
    singular: &[FieldKind::Gender, FieldKind::Dob],
};

impl Relationship {
    /// Route a batch of fields into the relationship's container.
    pub fn add_fields(&mut self, fields: Vec<Field>) -> Result<(), DataError> {
        self.fields.add_fields(fields, &RELATIONSHIP_SCHEMA)
    }

    /// Every field known about the related person.
    pub fn all_fields(&self) -> Vec<Field> {
        self.fields.all_fields()
    }

    /// The display string of the related person's first name, when one
    /// is known.
    pub fn display(&self) -> Option<String> {
        self.fields.names.first().and_then(|n| n.display.clone())
    }
}

impl DictSerializable for Relationship {
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        put_date(&mut d, "@valid_since", self.valid_since);
        if self.inferred == Some(true) {
            put_bool(&mut d, "@inferred", self.inferred);
        }
        put_str(&mut d, "@type", self.rel_type.map(RelationshipType::as_str));
        put_str(&mut d, "@subtype", self.subtype.as_deref());
        self.fields.fields_to_dict(&mut d);
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            fields: FieldsContainer::fields_from_dict(d, &RELATIONSHIP_SCHEMA)?,
            rel_type: r.get_enum("type")?,
            subtype: r.get_str("subtype")?,
            valid_since: r.get_date("valid_since")?,
            inferred: r.get_bool("inferred")?,
        })
    }
}
