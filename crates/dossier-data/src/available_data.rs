//! Per-kind counts of the data available for a search.

use serde_json::{Map, Value};

use crate::codec::DictSerializable;
use crate::error::DataError;

/// How many fields of each kind are available. Counts of zero are not
/// carried on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCount {
    /// Number of addresses.
    pub addresses: u32,
    /// Number of ethnicities.
    pub ethnicities: u32,
    /// Number of emails.
    pub emails: u32,
    /// Number of dates of birth.
    pub dobs: u32,
    /// Number of genders.
    pub genders: u32,
    /// Number of user IDs.
    pub user_ids: u32,
    /// Number of social profile sources.
    pub social_profiles: u32,
    /// Number of educations.
    pub educations: u32,
    /// Number of jobs.
    pub jobs: u32,
    /// Number of images.
    pub images: u32,
    /// Number of languages.
    pub languages: u32,
    /// Number of origin countries.
    pub origin_countries: u32,
    /// Number of names.
    pub names: u32,
    /// Number of phones of any type.
    pub phones: u32,
    /// Number of mobile phones.
    pub mobile_phones: u32,
    /// Number of landline phones.
    pub landline_phones: u32,
    /// Number of relationships.
    pub relationships: u32,
    /// Number of usernames.
    pub usernames: u32,
}

impl FieldCount {
    fn entries(&self) -> [(&'static str, u32); 18] {
        [
            ("addresses", self.addresses),
            ("ethnicities", self.ethnicities),
            ("emails", self.emails),
            ("dobs", self.dobs),
            ("genders", self.genders),
            ("user_ids", self.user_ids),
            ("social_profiles", self.social_profiles),
            ("educations", self.educations),
            ("jobs", self.jobs),
            ("images", self.images),
            ("languages", self.languages),
            ("origin_countries", self.origin_countries),
            ("names", self.names),
            ("phones", self.phones),
            ("mobile_phones", self.mobile_phones),
            ("landline_phones", self.landline_phones),
            ("relationships", self.relationships),
            ("usernames", self.usernames),
        ]
    }

    /// The total number of fields counted. Phone subtype counters are
    /// not added on top of the overall phone count.
    pub fn total(&self) -> u32 {
        self.entries()
            .iter()
            .filter(|(key, _)| *key != "mobile_phones" && *key != "landline_phones")
            .map(|(_, count)| count)
            .sum()
    }
}

impl DictSerializable for FieldCount {
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        for (key, count) in self.entries() {
            if count > 0 {
                d.insert(key.to_string(), Value::Number(count.into()));
            }
        }
        d
    }

    /// Keys that are unrecognized or not non-negative integers are
    /// dropped, counting as zero.
    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let count = |key: &str| -> u32 {
            d.get(key)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0)
        };
        let recognized = FieldCount::default().entries();
        for key in d.keys() {
            if !recognized.iter().any(|(k, _)| *k == key.as_str()) {
                tracing::warn!(%key, "ignoring unrecognized field count");
            }
        }
        Ok(Self {
            addresses: count("addresses"),
            ethnicities: count("ethnicities"),
            emails: count("emails"),
            dobs: count("dobs"),
            genders: count("genders"),
            user_ids: count("user_ids"),
            social_profiles: count("social_profiles"),
            educations: count("educations"),
            jobs: count("jobs"),
            images: count("images"),
            languages: count("languages"),
            origin_countries: count("origin_countries"),
            names: count("names"),
            phones: count("phones"),
            mobile_phones: count("mobile_phones"),
            landline_phones: count("landline_phones"),
            relationships: count("relationships"),
            usernames: count("usernames"),
        })
    }
}

/// What a search could return, split by the service's access tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvailableData {
    /// Counts available at the basic tier.
    pub basic: Option<FieldCount>,
    /// Counts available at the premium tier.
    pub premium: Option<FieldCount>,
}

impl DictSerializable for AvailableData {
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        if let Some(basic) = &self.basic {
            d.insert("basic".to_string(), Value::Object(basic.to_dict()));
        }
        if let Some(premium) = &self.premium {
            d.insert("premium".to_string(), Value::Object(premium.to_dict()));
        }
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let tier = |key: &str| -> Result<Option<FieldCount>, DataError> {
            match d.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Object(o)) => Ok(Some(FieldCount::from_dict(o)?)),
                Some(other) => Err(DataError::Decode(format!(
                    "{key} must be an object, got {other}"
                ))),
            }
        };
        Ok(Self {
            basic: tier("basic")?,
            premium: tier("premium")?,
        })
    }
}
