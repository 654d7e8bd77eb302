//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` structs.
//!
//! # Repositories
//!
//! - [`PgCatalogRepository`] - Movie listing, lookup and role-link queries

pub mod pg_catalog_repository;

pub use pg_catalog_repository::PgCatalogRepository;
