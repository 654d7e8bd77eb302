//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; the PostgreSQL implementation
//! lives in `crate::infrastructure::persistence`, and mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CatalogRepository`] - Movies, genres and role-linked persons

pub mod catalog_repository;

pub use catalog_repository::CatalogRepository;

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
