//! The response envelope a search returns.

use std::collections::HashMap;

use serde_json::{Map, Value};

use dossier_data::{AvailableData, DataError, DictSerializable, Person, Source};

use crate::error::{ApiError, ResponseError};

/// A search response.
///
/// `person` is present only when the service is confident the data
/// belongs to the queried person; otherwise `possible_persons` carries
/// the candidates, each with a search pointer for drilling down.
/// `sources` breaks the data down by origin and is only present when
/// the search asked for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    /// The query as the service interpreted it.
    pub query: Option<Person>,
    /// The matched person, when the match is definite.
    pub person: Option<Person>,
    /// Candidate matches, when the match is not definite.
    pub possible_persons: Vec<Person>,
    /// The response data broken down by origin.
    pub sources: Vec<Source>,
    /// Warnings attached to the response.
    pub warnings: Vec<String>,
    /// HTTP status code of the response.
    pub http_status_code: Option<u16>,
    /// Sources the response data was drawn from.
    pub visible_sources: Option<u32>,
    /// Sources the service knows about for this person.
    pub available_sources: Option<u32>,
    /// Identifier of this search in the service's logs.
    pub search_id: Option<String>,
    /// The match requirements the search was run with.
    pub match_requirements: Option<String>,
    /// The source category requirements the search was run with.
    pub source_category_requirements: Option<String>,
    /// What the search could return, by access tier.
    pub available_data: Option<AvailableData>,
}

impl SearchResponse {
    /// The sources the service is convinced belong to the queried
    /// person. These are the sources the matched person is built from.
    pub fn matching_sources(&self) -> Vec<&Source> {
        self.sources
            .iter()
            .filter(|s| s.match_score == Some(1.0))
            .collect()
    }

    /// The sources grouped by the domain they came from. Sources with
    /// no domain are left out.
    pub fn group_sources_by_domain(&self) -> HashMap<String, Vec<&Source>> {
        self.group_sources(|s| s.domain.clone())
    }

    /// The sources grouped by their category. Sources with no category
    /// are left out.
    pub fn group_sources_by_category(&self) -> HashMap<String, Vec<&Source>> {
        self.group_sources(|s| s.category.clone())
    }

    fn group_sources<F>(&self, key: F) -> HashMap<String, Vec<&Source>>
    where
        F: Fn(&Source) -> Option<String>,
    {
        let mut groups: HashMap<String, Vec<&Source>> = HashMap::new();
        for source in &self.sources {
            if let Some(k) = key(source) {
                groups.entry(k).or_default().push(source);
            }
        }
        groups
    }
}

impl DictSerializable for SearchResponse {
    /// `source_category_requirements` is an input echo the wire never
    /// carries back out, so it is decoded but not re-encoded.
    fn to_dict(&self) -> Map<String, Value> {
        let mut d = Map::new();
        if let Some(code) = self.http_status_code {
            d.insert("@http_status_code".to_string(), Value::Number(code.into()));
        }
        if let Some(n) = self.visible_sources {
            d.insert("@visible_sources".to_string(), Value::Number(n.into()));
        }
        if let Some(n) = self.available_sources {
            d.insert("@available_sources".to_string(), Value::Number(n.into()));
        }
        if let Some(id) = self.search_id.as_deref().filter(|id| !id.is_empty()) {
            d.insert("@search_id".to_string(), Value::String(id.to_string()));
        }
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
        if let Some(req) = self.match_requirements.as_deref().filter(|r| !r.is_empty()) {
            d.insert("match_requirements".to_string(), Value::String(req.to_string()));
        }
        if let Some(data) = &self.available_data {
            d.insert("available_data".to_string(), Value::Object(data.to_dict()));
        }
        if let Some(query) = &self.query {
            d.insert("query".to_string(), Value::Object(query.to_dict()));
        }
        if let Some(person) = &self.person {
            d.insert("person".to_string(), Value::Object(person.to_dict()));
        }
        if !self.sources.is_empty() {
            d.insert(
                "sources".to_string(),
                Value::Array(
                    self.sources
                        .iter()
                        .map(|s| Value::Object(s.to_dict()))
                        .collect(),
                ),
            );
        }
        if !self.possible_persons.is_empty() {
            d.insert(
                "possible_persons".to_string(),
                Value::Array(
                    self.possible_persons
                        .iter()
                        .map(|p| Value::Object(p.to_dict()))
                        .collect(),
                ),
            );
        }
        d
    }

    fn from_dict(d: &Map<String, Value>) -> Result<Self, DataError> {
        let entity = |key: &str| -> Result<Option<Person>, DataError> {
            match d.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Object(o)) => Ok(Some(Person::from_dict(o)?)),
                Some(other) => Err(DataError::Decode(format!(
                    "{key} must be an object, got {other}"
                ))),
            }
        };
        let list = |key: &str| -> Result<Vec<&Map<String, Value>>, DataError> {
            match d.get(key) {
                None | Some(Value::Null) => Ok(Vec::new()),
                Some(Value::Array(items)) => items
                    .iter()
                    .map(|item| {
                        item.as_object().ok_or_else(|| {
                            DataError::Decode(format!("{key} items must be objects, got {item}"))
                        })
                    })
                    .collect(),
                Some(other) => Err(DataError::Decode(format!(
                    "{key} must be an array, got {other}"
                ))),
            }
        };
        let available_data = match d.get("available_data") {
            None | Some(Value::Null) => None,
            Some(Value::Object(o)) => Some(AvailableData::from_dict(o)?),
            Some(other) => {
                return Err(DataError::Decode(format!(
                    "available_data must be an object, got {other}"
                )));
            }
        };
        Ok(Self {
            query: entity("query")?,
            person: entity("person")?,
            possible_persons: list("possible_persons")?
                .into_iter()
                .map(Person::from_dict)
                .collect::<Result<_, _>>()?,
            sources: list("sources")?
                .into_iter()
                .map(Source::from_dict)
                .collect::<Result<_, _>>()?,
            warnings: match d.get("warnings") {
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
            },
            http_status_code: d
                .get("@http_status_code")
                .and_then(Value::as_u64)
                .and_then(|n| u16::try_from(n).ok()),
            visible_sources: d
                .get("@visible_sources")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            available_sources: d
                .get("@available_sources")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            search_id: d
                .get("@search_id")
                .and_then(Value::as_str)
                .map(str::to_string),
            match_requirements: d
                .get("match_requirements")
                .and_then(Value::as_str)
                .map(str::to_string),
            source_category_requirements: d
                .get("source_category_requirements")
                .and_then(Value::as_str)
                .map(str::to_string),
            available_data,
        })
    }
}

/// Interpret a raw response body: a body carrying an `error` key is the
/// service's error payload, anything else is a search response.
pub fn parse_response(body: &str) -> Result<SearchResponse, ResponseError> {
    let value: Value = serde_json::from_str(body).map_err(DataError::from)?;
    let d = value
        .as_object()
        .ok_or_else(|| DataError::Decode("expected a JSON object".to_string()))?;
    if d.contains_key("error") {
        return Err(ResponseError::Api(ApiError::from_dict(d)?));
    }
    Ok(SearchResponse::from_dict(d)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_sources() -> SearchResponse {
        let source = |domain: &str, category: &str, score: f64| Source {
            domain: Some(domain.to_string()),
            category: Some(category.to_string()),
            match_score: Some(score),
            ..Default::default()
        };
        SearchResponse {
            sources: vec![
                source("linkedin.com", "professional_and_business", 1.0),
                source("facebook.com", "personal_profiles", 1.0),
                source("linkedin.com", "professional_and_business", 0.41),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_matching_sources_require_a_perfect_match() {
        let response = response_with_sources();
        assert_eq!(response.matching_sources().len(), 2);
    }

    #[test]
    fn test_grouping_by_domain() {
        let response = response_with_sources();
        let groups = response.group_sources_by_domain();
        assert_eq!(groups["linkedin.com"].len(), 2);
        assert_eq!(groups["facebook.com"].len(), 1);
    }

    #[test]
    fn test_grouping_skips_sources_without_the_key() {
        let mut response = response_with_sources();
        response.sources.push(Source::default());
        let groups = response.group_sources_by_category();
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_error_bodies_become_api_errors() {
        let body = r#"{"error": "Per second limit reached", "@http_status_code": 403}"#;
        match parse_response(body) {
            Err(ResponseError::Api(e)) => {
                assert_eq!(e.http_status_code, 403);
                assert!(e.is_user_error());
            }
            other => panic!("expected an API error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_string_warnings_are_rejected() {
        let body = r#"{"@http_status_code": 200, "warnings": ["slow query", 42]}"#;
        assert!(matches!(
            parse_response(body),
            Err(ResponseError::Data(DataError::Decode(_)))
        ));
    }

    #[test]
    fn test_garbage_bodies_become_data_errors() {
        assert!(matches!(
            parse_response("<html>Bad Gateway</html>"),
            Err(ResponseError::Data(DataError::Json(_)))
        ));
    }
}
