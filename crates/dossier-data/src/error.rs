//! Error types for the data model.

use thiserror::Error;

use crate::fields::FieldKind;

/// Errors raised while constructing, validating, or (de)serializing
/// the person data model.
#[derive(Debug, Error)]
pub enum DataError {
    /// A field was added to a container that declares no slot for its kind.
    #[error("{container} does not accept {kind} fields")]
    UnsupportedField {
        /// Kind of the rejected field.
        kind: FieldKind,
        /// Name of the container type that rejected it.
        container: &'static str,
    },

    /// A value outside a field's closed enumeration.
    #[error("invalid {field} value: {value:?}")]
    InvalidEnumValue {
        /// Which enumeration was violated (e.g. "name type").
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A date string that does not match the `YYYY-MM-DD` wire format.
    #[error("malformed date: {0:?}")]
    MalformedDate(String),

    /// A payload key held the wrong JSON shape (e.g. a number where a
    /// string was expected, or a scalar where an array was expected).
    #[error("malformed payload: {0}")]
    Decode(String),

    /// An argument outside its domain (future birth date, non-positive
    /// birth year, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e.to_string())
    }
}
