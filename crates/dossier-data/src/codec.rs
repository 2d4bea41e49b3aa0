//! Scalar codecs: date formatting, character-class filters, and the
//! URL/email shape checks shared across field types.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::DataError;

/// Wire format for dates. The protocol carries date-only resolution,
/// so datetimes use the same representation.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    /// Basic email shape check. Intentionally loose; the service is
    /// the authority on deliverability.
    pub(crate) static ref EMAIL_RE: Regex =
        Regex::new(r"^[\w.%\-+]+@[\w.%\-]+\.[a-zA-Z]{2,6}$").unwrap();

    static ref URL_RE: Regex = Regex::new(
        r"(?i)^(?:(?:ht|f)tps?://|~/|/)?(?:\w+:\w+@)?(?:[-\w]+\.)+(?:com|org|net|gov|mil|biz|info|mobi|name|aero|jobs|museum|travel|[a-z]{2})(?::\d{1,5})?(?:[/?#]\S*)?$"
    )
    .unwrap();
}

/// Parse a `YYYY-MM-DD` string into a date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DataError::MalformedDate(s.to_string()))
}

/// Format a date into the fixed-width `YYYY-MM-DD` wire form.
pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Strip everything but alphabetic characters from `s`.
pub fn alpha_chars(s: &str) -> String {
    s.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Strip everything but alphanumeric characters from `s`.
pub fn alnum_chars(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Whether `url` looks like a well-formed URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// Capitalize the first letter of each whitespace-separated word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bidirectional dict/JSON codec implemented by every entity in the
/// data model.
///
/// `to_dict`/`from_dict` define the wire shape; `to_json`/`from_json`
/// are the string framing on top of it. For every valid populated
/// value, `from_dict(&x.to_dict())` reconstructs a structurally equal
/// value.
pub trait DictSerializable: Sized {
    /// Encode into the key/value wire shape.
    fn to_dict(&self) -> Map<String, Value>;

    /// Decode from the key/value wire shape. Unknown keys are ignored.
    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError>;

    /// Serialize to a JSON object string.
    fn to_json(&self) -> String {
        Value::Object(self.to_dict()).to_string()
    }

    /// Deserialize from a JSON object string.
    fn from_json(s: &str) -> Result<Self, DataError> {
        let value: Value = serde_json::from_str(s)?;
        let d = value
            .as_object()
            .ok_or_else(|| DataError::Decode("expected a JSON object".to_string()))?;
        Self::from_dict(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trip() {
        let date = parse_date("1984-07-16").unwrap();
        assert_eq!(format_date(date), "1984-07-16");
    }

    #[test]
    fn test_malformed_date_is_fatal() {
        assert!(parse_date("16/07/1984").is_err());
        assert!(parse_date("1984-7-16x").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_alpha_chars() {
        assert_eq!(alpha_chars("Clark J. Kent 3rd"), "ClarkJKentrd");
        assert_eq!(alpha_chars("123"), "");
    }

    #[test]
    fn test_alnum_chars() {
        assert_eq!(alnum_chars("superman86!"), "superman86");
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("http://www.example.com"));
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("example.co.uk"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("male"), "Male");
        assert_eq!(title_case("other asian"), "Other Asian");
    }
}
