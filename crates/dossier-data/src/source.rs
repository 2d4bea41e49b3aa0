//! A source: one website or record the service drew fields from.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::container::{ContainerSchema, FieldsContainer};
use crate::error::DataError;
use crate::fields::{put_bool, put_date, put_f64, put_str, DictReader, Field, FieldKind};

/// The field kinds a source accepts: everything, tags included.
pub const SOURCE_SCHEMA: ContainerSchema = ContainerSchema {
    container: "source",
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
        FieldKind::Tag,
    ],
    singular: &[FieldKind::Gender, FieldKind::Dob],
};

/// One website or record the service drew fields from, with the fields
/// exactly as that source reported them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Source {
    /// The fields as this source reported them.
    pub fields: FieldsContainer,
    /// Site name, e.g. "LinkedIn".
    pub name: Option<String>,
    /// Source category, e.g. "professional_and_business".
    pub category: Option<String>,
    /// URL of the record at the source.
    pub origin_url: Option<String>,
    /// Domain of the source.
    pub domain: Option<String>,
    /// Identifier of this source record.
    pub source_id: Option<String>,
    /// Identifier of the person this source belongs to.
    pub person_id: Option<String>,
    /// Whether the source is a sponsored result.
    pub sponsored: Option<bool>,
    /// Whether the source is behind the service's premium tier.
    pub premium: Option<bool>,
    /// How well this source matches the query, 0 to 1.
    pub match_score: Option<f64>,
    /// When this source was first seen by the service's crawlers.
    pub valid_since: Option<NaiveDate>,
}

impl Source {
    /// Route a batch of fields into the source's container.
    pub fn add_fields(&mut self, fields: Vec<Field>) -> Result<(), DataError> {
        self.fields.add_fields(fields, &SOURCE_SCHEMA)
    }

    /// Every field this source reported.
    pub fn all_fields(&self) -> Vec<Field> {
        self.fields.all_fields()
    }
}

impl DictSerializable for Source {
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        put_str(&mut d, "@name", self.name.as_deref());
        put_str(&mut d, "@category", self.category.as_deref());
        put_str(&mut d, "@origin_url", self.origin_url.as_deref());
        put_str(&mut d, "@domain", self.domain.as_deref());
        // The wire drops these two unless they carry a truthy value.
        if self.source_id.as_deref().is_some_and(|id| !id.is_empty()) {
            put_str(&mut d, "@id", self.source_id.as_deref());
        }
        if self.premium == Some(true) {
            put_bool(&mut d, "@premium", self.premium);
        }
        put_str(&mut d, "@person_id", self.person_id.as_deref());
        put_bool(&mut d, "@sponsored", self.sponsored);
        put_f64(&mut d, "@match", self.match_score);
        put_date(&mut d, "@valid_since", self.valid_since);
        self.fields.fields_to_dict(&mut d);
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            fields: FieldsContainer::fields_from_dict(d, &SOURCE_SCHEMA)?,
            name: r.get_str("name")?,
            category: r.get_str("category")?,
            origin_url: r.get_str("origin_url")?,
            domain: r.get_str("domain")?,
            source_id: r.get_str("id")?,
            person_id: r.get_str("person_id")?,
            sponsored: r.get_bool("sponsored")?,
            premium: r.get_bool("premium")?,
            match_score: r.get_f64("match")?,
            valid_since: r.get_date("valid_since")?,
        })
    }
}
