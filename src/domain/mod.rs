//! Domain layer containing catalog entities and paging rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core catalog data structures
//! - [`pagination`] - Page-number parsing and page arithmetic
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod entities;
pub mod pagination;
pub mod repositories;
