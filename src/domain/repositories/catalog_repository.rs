//! Repository trait for read access to the movie catalog.

use crate::domain::entities::{Movie, MovieRecord, PersonLink};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Read-only interface to the catalog store.
///
/// Movies are always returned ordered by identifier ascending so that
/// offset/limit paging is stable.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCatalogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_catalog.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Counts all movies in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_movies(&self) -> Result<i64, AppError>;

    /// Fetches one page of movies with their related names in a single
    /// batched query.
    ///
    /// Every name collection of the returned records is deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_movies_aggregated(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<MovieRecord>, AppError>;

    /// Fetches one page of bare movie rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_movies(&self, offset: i64, limit: i64) -> Result<Vec<Movie>, AppError>;

    /// Finds a movie by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Movie))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_movie(&self, id: Uuid) -> Result<Option<Movie>, AppError>;

    /// Lists every role-link of a movie, one entry per link.
    ///
    /// Links with a role outside actor/director/writer are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_person_links(&self, movie_id: Uuid) -> Result<Vec<PersonLink>, AppError>;

    /// Lists the genre names attached to a movie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_genre_names(&self, movie_id: Uuid) -> Result<Vec<String>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
