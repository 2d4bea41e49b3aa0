//! A postal address of a person.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::DataError;
use crate::fields::{put_str, DictReader, FieldBase};
use crate::geo;

/// Classification of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Home address.
    Home,
    /// Work address.
    Work,
    /// An address no longer in use.
    Old,
}

impl AddressType {
    /// The wire value of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::Home => "home",
            AddressType::Work => "work",
            AddressType::Old => "old",
        }
    }
}

impl FromStr for AddressType {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, DataError> {
        match s {
            "home" => Ok(AddressType::Home),
            "work" => Ok(AddressType::Work),
            "old" => Ok(AddressType::Old),
            _ => Err(DataError::InvalidEnumValue {
                field: "address type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which searchability rule [`Address::is_searchable`] applies.
///
/// The service historically shipped two rules. The crate pins
/// [`DEFAULT_ADDRESS_SEARCH_RULE`] so callers and tests can rely on a
/// single documented policy, while the legacy rule stays reachable
/// through [`Address::is_searchable_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSearchRule {
    /// Raw text present, or a valid country code accompanied by a zip
    /// code, a valid state code, or no state at all.
    Strict,
    /// Any of raw, country, state or city present.
    Lenient,
}

/// The rule applied by [`Address::is_searchable`].
pub const DEFAULT_ADDRESS_SEARCH_RULE: AddressSearchRule = AddressSearchRule::Strict;

/// A postal address of a person.
///
/// `country` and `state` hold codes ("US", "NY"); full display names
/// are available through [`Address::country_full`] and
/// [`Address::state_full`]. `raw` is an unparsed address for querying;
/// response data always carries parsed addresses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    /// Shared field metadata.
    pub base: FieldBase,
    /// Two-letter country code.
    pub country: Option<String>,
    /// State/subdivision code.
    pub state: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Post office box.
    pub po_box: Option<String>,
    /// Zip/postal code.
    pub zip_code: Option<String>,
    /// Street name.
    pub street: Option<String>,
    /// House number.
    pub house: Option<String>,
    /// Apartment number.
    pub apartment: Option<String>,
    /// Unparsed address, only meaningful in queries.
    pub raw: Option<String>,
    /// Classification of the address.
    pub address_type: Option<AddressType>,
    /// Display string as formatted by the service.
    pub display: Option<String>,
}

impl Address {
    /// Whether the address can be searched by, under the pinned
    /// [`DEFAULT_ADDRESS_SEARCH_RULE`].
    pub fn is_searchable(&self) -> bool {
        self.is_searchable_by(DEFAULT_ADDRESS_SEARCH_RULE)
    }

    /// Whether the address can be searched by, under an explicit rule.
    pub fn is_searchable_by(&self, rule: AddressSearchRule) -> bool {
        match rule {
            AddressSearchRule::Strict => {
                self.raw.as_deref().is_some_and(|r| !r.is_empty())
                    || (self.is_valid_country()
                        && (self.zip_code.as_deref().is_some_and(|z| !z.is_empty())
                            || self.is_valid_state()
                            || self.state.is_none()))
            }
            AddressSearchRule::Lenient => {
                self.raw.is_some()
                    || self.country.is_some()
                    || self.state.is_some()
                    || self.city.is_some()
            }
        }
    }

    /// Whether the address alone is enough to search by: raw text, or
    /// a complete city + street + house triple.
    pub fn is_sole_searchable(&self) -> bool {
        self.raw.as_deref().is_some_and(|r| !r.is_empty())
            || (self.city.is_some() && self.street.is_some() && self.house.is_some())
    }

    /// Whether the country is a recognized country code.
    pub fn is_valid_country(&self) -> bool {
        self.country.as_deref().is_some_and(geo::is_valid_country)
    }

    /// Whether the state is a recognized subdivision code of a
    /// recognized country.
    pub fn is_valid_state(&self) -> bool {
        match (self.country.as_deref(), self.state.as_deref()) {
            (Some(country), Some(state)) => geo::is_valid_state(country, state),
            _ => false,
        }
    }

    /// Full display name of the country, e.g. "FR" -> "France".
    pub fn country_full(&self) -> Option<&'static str> {
        self.country.as_deref().and_then(geo::country_name)
    }

    /// Full display name of the state, e.g. ("US", "CO") -> "Colorado".
    pub fn state_full(&self) -> Option<&'static str> {
        match (self.country.as_deref(), self.state.as_deref()) {
            (Some(country), Some(state)) => geo::state_name(country, state),
            _ => None,
        }
    }

    /// Encode into the wire dict.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        self.base.encode_into(&mut d);
        put_str(&mut d, "@type", self.address_type.map(AddressType::as_str));
        put_str(&mut d, "country", self.country.as_deref());
        put_str(&mut d, "state", self.state.as_deref());
        put_str(&mut d, "city", self.city.as_deref());
        put_str(&mut d, "po_box", self.po_box.as_deref());
        put_str(&mut d, "zip_code", self.zip_code.as_deref());
        put_str(&mut d, "street", self.street.as_deref());
        put_str(&mut d, "house", self.house.as_deref());
        put_str(&mut d, "apartment", self.apartment.as_deref());
        put_str(&mut d, "raw", self.raw.as_deref());
        put_str(&mut d, "display", self.display.as_deref());
        d
    }

    /// Decode from the wire dict. Unknown keys are ignored.
    pub fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let r = DictReader::new(d);
        Ok(Self {
            base: FieldBase::decode(&r)?,
            country: r.get_str("country")?,
            state: r.get_str("state")?,
            city: r.get_str("city")?,
            po_box: r.get_str("po_box")?,
            zip_code: r.get_str("zip_code")?,
            street: r.get_str("street")?,
            house: r.get_str("house")?,
            apartment: r.get_str("apartment")?,
            raw: r.get_str("raw")?,
            address_type: r.get_enum("type")?,
            display: r.get_str("display")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_rule_requires_valid_country() {
        let address = Address {
            city: Some("Smallville".to_string()),
            ..Default::default()
        };
        assert!(!address.is_searchable());
        assert!(address.is_searchable_by(AddressSearchRule::Lenient));
    }

    #[test]
    fn test_strict_rule_accepts_country_with_valid_state() {
        let address = Address {
            country: Some("US".to_string()),
            state: Some("KS".to_string()),
            ..Default::default()
        };
        assert!(address.is_searchable());
    }

    #[test]
    fn test_strict_rule_rejects_invalid_state_without_zip() {
        let address = Address {
            country: Some("US".to_string()),
            state: Some("XX".to_string()),
            ..Default::default()
        };
        assert!(!address.is_searchable());
        let with_zip = Address {
            zip_code: Some("66002".to_string()),
            ..address
        };
        assert!(with_zip.is_searchable());
    }

    #[test]
    fn test_country_alone_is_searchable_under_strict_rule() {
        let address = Address {
            country: Some("FR".to_string()),
            ..Default::default()
        };
        assert!(address.is_searchable());
    }

    #[test]
    fn test_raw_is_always_searchable() {
        let address = Address {
            raw: Some("123 Marina Blvd, San Francisco, CA, US".to_string()),
            ..Default::default()
        };
        assert!(address.is_searchable());
        assert!(address.is_sole_searchable());
    }

    #[test]
    fn test_sole_searchable_needs_city_street_house() {
        let address = Address {
            city: Some("Metropolis".to_string()),
            street: Some("Main St".to_string()),
            house: Some("1".to_string()),
            ..Default::default()
        };
        assert!(address.is_sole_searchable());
        let partial = Address {
            house: None,
            ..address
        };
        assert!(!partial.is_sole_searchable());
    }

    #[test]
    fn test_full_names() {
        let address = Address {
            country: Some("US".to_string()),
            state: Some("CO".to_string()),
            ..Default::default()
        };
        assert_eq!(address.country_full(), Some("United States"));
        assert_eq!(address.state_full(), Some("Colorado"));
    }

    #[test]
    fn test_round_trip() {
        let original = Address {
            country: Some("US".to_string()),
            state: Some("KS".to_string()),
            city: Some("Smallville".to_string()),
            street: Some("Hickory Lane".to_string()),
            house: Some("10".to_string()),
            address_type: Some(AddressType::Home),
            ..Default::default()
        };
        let decoded = Address::from_dict(&original.to_dict()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let mut d = Map::new();
        d.insert("@type".to_string(), Value::String("vacation".to_string()));
        assert!(Address::from_dict(&d).is_err());
    }
}
