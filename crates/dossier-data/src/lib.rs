//! Data model for a person-search service.
//!
//! The model is built from [`fields`](crate::fields) - typed,
//! self-contained data about a person (a name, an address, a phone) -
//! and containers that hold them: a [`Person`], the [`Source`] records
//! the person's data was drawn from, and the [`Relationship`]s to
//! other people.
//!
//! Every entity speaks the same wire protocol through
//! [`DictSerializable`]: a key/value dict where reserved metadata keys
//! carry an `@` prefix, payload keys are plain, and absent or empty
//! values are omitted. Decoding tolerates unknown keys, so the model
//! stays forward compatible with server-added data.
//!
//! ```
//! use dossier_data::fields::{Email, Field, Name};
//! use dossier_data::{DictSerializable, Person};
//!
//! let mut person = Person::default();
//! person.add_fields(vec![
//!     Field::Name(Name {
//!         first: Some("Clark".to_string()),
//!         last: Some("Kent".to_string()),
//!         ..Default::default()
//!     }),
//!     Field::Email(Email {
//!         address: Some("clark.kent@example.com".to_string()),
//!         ..Default::default()
//!     }),
//! ])?;
//! assert!(person.is_searchable());
//!
//! let restored = Person::from_json(&person.to_json())?;
//! assert_eq!(restored, person);
//! # Ok::<(), dossier_data::DataError>(())
//! ```

#![warn(missing_docs)]

pub mod available_data;
pub mod codec;
pub mod container;
pub mod date_range;
pub mod error;
pub mod fields;
pub mod geo;
pub mod person;
pub mod relationship;
pub mod source;

pub use available_data::{AvailableData, FieldCount};
pub use codec::DictSerializable;
pub use container::{ContainerSchema, FieldsContainer};
pub use date_range::DateRange;
pub use error::DataError;
pub use fields::{Field, FieldKind};
pub use person::{Person, PERSON_SCHEMA};
pub use relationship::{Relationship, RelationshipType, RELATIONSHIP_SCHEMA};
pub use source::{Source, SOURCE_SCHEMA};
