//! The error payload the service returns in place of a response.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use thiserror::Error;

use dossier_data::{DataError, DictSerializable};

/// An error returned by the service itself, as opposed to a local
/// decode failure.
///
/// The quota and throttle attachments are not part of the JSON body;
/// the transport reads them from response headers and attaches them
/// through [`ApiError::add_quota_and_throttle_data`].
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("{error} (HTTP {http_status_code})")]
pub struct ApiError {
    /// The service's error message.
    pub error: String,
    /// HTTP status code of the response.
    pub http_status_code: u16,
    /// Warnings attached to the failed request.
    pub warnings: Vec<String>,
    /// Permitted queries per second.
    pub qps_allotted: Option<u32>,
    /// Queries run in the same second as this one.
    pub qps_current: Option<u32>,
    /// The account's total quota.
    pub quota_allotted: Option<u32>,
    /// Quota used so far.
    pub quota_current: Option<u32>,
    /// When the quota resets.
    pub quota_reset: Option<NaiveDateTime>,
}

impl ApiError {
    /// Whether the error is on the caller's side (HTTP 4xx).
    pub fn is_user_error(&self) -> bool {
        (400..500).contains(&self.http_status_code)
    }

    /// Whether the error is on the service's side.
    pub fn is_service_error(&self) -> bool {
        !self.is_user_error()
    }

    /// Attach the quota and throttle data the transport read from the
    /// response headers.
    pub fn add_quota_and_throttle_data(
        &mut self,
        quota_allotted: Option<u32>,
        quota_current: Option<u32>,
        qps_allotted: Option<u32>,
        qps_current: Option<u32>,
        quota_reset: Option<NaiveDateTime>,
    ) {
        self.quota_allotted = quota_allotted;
        self.quota_current = quota_current;
        self.qps_allotted = qps_allotted;
        self.qps_current = qps_current;
        self.quota_reset = quota_reset;
    }
}

impl DictSerializable for ApiError {
    /// Only the JSON-body attributes are carried; header-derived quota
    /// data is not.
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        d.insert("error".to_string(), Value::String(self.error.clone()));
        d.insert(
            "@http_status_code".to_string(),
            Value::Number(self.http_status_code.into()),
        );
        if !self.warnings.is_empty() {
            d.insert(
                "warnings".to_string(),
                Value::Array(
                    self.warnings
                        .iter()
                        .map(|w| Value::String(w.clone()))
                        .collect(),
                ),
            );
        }
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let error = match d.get("error") {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => {
                return Err(DataError::Decode(format!(
                    "error must be a string, got {other}"
                )));
            }
        };
        let http_status_code = d
            .get("@http_status_code")
            .and_then(Value::as_u64)
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| {
                DataError::Decode("@http_status_code must be an HTTP status code".to_string())
            })?;
        let warnings = match d.get("warnings") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|w| match w {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(DataError::Decode(format!(
                        "warnings must be strings, got {other}"
                    ))),
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(DataError::Decode(format!(
                    "warnings must be an array, got {other}"
                )));
            }
        };
        Ok(Self {
            error,
            http_status_code,
            warnings,
            ..Default::default()
        })
    }
}

/// Everything that can go wrong while interpreting a response body.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The service returned an error payload.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The body could not be decoded into the data model.
    #[error(transparent)]
    Data(#[from] DataError),
}
