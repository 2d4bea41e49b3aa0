//! A URL related to a person.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_bool, put_str, DictReader, FieldBase};

/// The service's classification of a related URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlCategory {
    /// A background report vendor page.
    BackgroundReports,
    /// A contact details page.
    ContactDetails,
    /// An email address listing.
    EmailAddress,
    /// News and media coverage.
    Media,
    /// A personal social profile.
    PersonalProfiles,
    /// A professional or business profile.
    ProfessionalAndBusiness,
    /// A public records page.
    PublicRecords,
    /// A publication authored by the person.
    Publications,
    /// A school or classmates page.
    SchoolAndClassmates,
    /// An uncategorized web page.
    WebPages,
}

impl UrlCategory {
    /// The wire value of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            UrlCategory::BackgroundReports => "background_reports",
            UrlCategory::ContactDetails => "contact_details",
            UrlCategory::EmailAddress => "email_address",
            UrlCategory::Media => "media",
            UrlCategory::PersonalProfiles => "personal_profiles",
            UrlCategory::ProfessionalAndBusiness => "professional_and_business",
            UrlCategory::PublicRecords => "public_records",
            UrlCategory::Publications => "publications",
            UrlCategory::SchoolAndClassmates => "school_and_classmates",
            UrlCategory::WebPages => "web_pages",
        }
    }
}

impl FromStr for UrlCategory {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "background_reports" => Ok(UrlCategory::BackgroundReports),
            "contact_details" => Ok(UrlCategory::ContactDetails),
            "email_address" => Ok(UrlCategory::EmailAddress),
            "media" => Ok(UrlCategory::Media),
            "personal_profiles" => Ok(UrlCategory::PersonalProfiles),
            "professional_and_business" => Ok(UrlCategory::ProfessionalAndBusiness),
            "public_records" => Ok(UrlCategory::PublicRecords),
            "publications" => Ok(UrlCategory::Publications),
            "school_and_classmates" => Ok(UrlCategory::SchoolAndClassmates),
            "web_pages" => Ok(UrlCategory::WebPages),
            _ => Err(DataError::InvalidEnumValue {
                field: "url category",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UrlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL related to a person, typically a profile page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Url {
    /// Shared field metadata.
    pub base: FieldBase,
    /// The URL itself.
    pub url: Option<String>,
    /// The service's classification of the page.
    pub category: Option<UrlCategory>,
    /// Whether the link is a sponsored result.
    pub sponsored: Option<bool>,
    /// Domain of the URL.
    pub domain: Option<String>,
    /// Site name, e.g. "LinkedIn".
    pub name: Option<String>,
    /// Identifier of the source the URL came from.
    pub source_id: Option<String>,
}

impl Url {
    /// Whether the field can be searched by: the URL itself present.
    pub fn is_searchable(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    /// The display string: the URL, or the site name when the URL is
    /// withheld.
    pub fn display(&self) -> Option<String> {
        self.url.clone().or_else(|| self.name.clone())
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "@category", self.category.map(UrlCategory::as_str));
        put_bool(&mut d, "@sponsored", self.sponsored);
        put_str(&mut d, "@domain", self.domain.as_deref());
        put_str(&mut d, "@name", self.name.as_deref());
        put_str(&mut d, "@source_id", self.source_id.as_deref());
        put_str(&mut d, "url", self.url.as_deref());
        put_str(&mut d, "display", self.display().as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            url: r.get_str("url")?,
            category: r.get_enum("category")?,
            sponsored: r.get_bool("sponsored")?,
            domain: r.get_str("domain")?,
            name: r.get_str("name")?,
            source_id: r.get_str("source_id")?,
        })
    }
}
