//! Response envelope and error payload for a person-search service.
//!
//! This crate layers the service's response protocol over the
//! [`dossier_data`] model: a [`SearchResponse`] wrapping the matched
//! person, candidate matches, per-origin sources and the available
//! data summary, and an [`ApiError`] for the error payload the service
//! returns instead. [`parse_response`] dispatches a raw body between
//! the two.
//!
//! Transport is out of scope: callers bring their own HTTP client and
//! feed response bodies (and quota headers) in.

#![warn(missing_docs)]

pub mod error;
pub mod response;

pub use error::{ApiError, ResponseError};
pub use response::{parse_response, SearchResponse};
