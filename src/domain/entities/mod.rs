//! Core domain entities representing the catalog data model.
//!
//! Entities are plain data structures; persistence rows are mapped into them
//! by the infrastructure layer.
//!
//! # Entity Types
//!
//! - [`Movie`] - A film work with its scalar attributes
//! - [`Credits`] - Genre and person names related to a movie
//! - [`MovieRecord`] - A movie paired with its credits
//! - [`PersonLink`] - A person attached to a movie under a [`PersonRole`]

pub mod movie;
pub mod person;

pub use movie::{Credits, Movie, MovieRecord};
pub use person::{PersonLink, PersonRole, UnknownRole};
