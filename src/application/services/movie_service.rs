//! Movie listing and detail service.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Credits, MovieRecord};
use crate::domain::pagination::{PAGE_SIZE, PageRequest, PageWindow, Paginator};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

pub const INVALID_UUID_MESSAGE: &str = "Invalid UUID format";
pub const MOVIE_NOT_FOUND_MESSAGE: &str = "FilmWork not found";

/// How a listing page collects related names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingStrategy {
    /// One batched query that groups names by movie.
    #[default]
    Aggregate,
    /// One page query, then per-movie lookups of links and genres.
    PerRow,
}

impl ListingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStrategy::Aggregate => "aggregate",
            ListingStrategy::PerRow => "per_row",
        }
    }
}

impl fmt::Display for ListingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggregate" => Ok(ListingStrategy::Aggregate),
            "per_row" => Ok(ListingStrategy::PerRow),
            other => Err(format!(
                "expected 'aggregate' or 'per_row', got '{}'",
                other
            )),
        }
    }
}

/// Tuning knobs for [`MovieService`].
#[derive(Debug, Clone, Copy)]
pub struct MovieServiceOptions {
    pub listing_strategy: ListingStrategy,
    /// When false, detail responses repeat a name once per role-link.
    pub deduplicate_detail: bool,
}

impl Default for MovieServiceOptions {
    fn default() -> Self {
        Self {
            listing_strategy: ListingStrategy::default(),
            deduplicate_detail: true,
        }
    }
}

/// One resolved listing page.
#[derive(Debug, Clone)]
pub struct MoviePage {
    /// Total number of movies in the catalog.
    pub count: u64,
    pub window: PageWindow,
    pub results: Vec<MovieRecord>,
}

/// Service for listing movies page by page and fetching a single movie.
pub struct MovieService<R: CatalogRepository + ?Sized> {
    repository: Arc<R>,
    options: MovieServiceOptions,
}

impl<R: CatalogRepository + ?Sized> MovieService<R> {
    /// Creates a movie service with default options.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_options(repository, MovieServiceOptions::default())
    }

    pub fn with_options(repository: Arc<R>, options: MovieServiceOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    pub fn options(&self) -> MovieServiceOptions {
        self.options
    }

    /// Returns one page of movies with deduplicated related names.
    ///
    /// `page_param` is the raw `page` query value; see
    /// [`PageRequest::parse`] for the accepted forms. Out-of-range pages
    /// clamp to the last page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a numeric page cannot be converted.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_movies(&self, page_param: Option<&str>) -> Result<MoviePage, AppError> {
        let request = PageRequest::parse(page_param)?;

        let count = u64::try_from(self.repository.count_movies().await?).unwrap_or(0);
        let window = Paginator::new(count, PAGE_SIZE).page(request);

        // Offset never exceeds the row count, which came from an i64.
        let offset = window.offset as i64;
        let limit = window.limit as i64;

        let results = match self.options.listing_strategy {
            ListingStrategy::Aggregate => {
                self.repository
                    .list_movies_aggregated(offset, limit)
                    .await?
            }
            ListingStrategy::PerRow => self.list_per_row(offset, limit).await?,
        };

        tracing::debug!(
            page = window.number,
            total_pages = window.total_pages,
            results = results.len(),
            strategy = %self.options.listing_strategy,
            "Listed movies"
        );

        Ok(MoviePage {
            count,
            window,
            results,
        })
    }

    /// Fetches a single movie with its related names.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id_param` is not a UUID or no
    /// movie has that identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_movie(&self, id_param: &str) -> Result<MovieRecord, AppError> {
        let id = Uuid::parse_str(id_param).map_err(|_| AppError::not_found(INVALID_UUID_MESSAGE))?;

        let movie = self
            .repository
            .find_movie(id)
            .await?
            .ok_or_else(|| AppError::not_found(MOVIE_NOT_FOUND_MESSAGE))?;

        let credits = self.load_credits(id).await?;
        let credits = if self.options.deduplicate_detail {
            credits.deduplicated()
        } else {
            credits
        };

        Ok(MovieRecord::new(movie, credits))
    }

    /// Checks that the catalog store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn list_per_row(&self, offset: i64, limit: i64) -> Result<Vec<MovieRecord>, AppError> {
        let movies = self.repository.list_movies(offset, limit).await?;

        let mut records = Vec::with_capacity(movies.len());
        for movie in movies {
            let credits = self.load_credits(movie.id).await?.deduplicated();
            records.push(MovieRecord::new(movie, credits));
        }

        Ok(records)
    }

    async fn load_credits(&self, movie_id: Uuid) -> Result<Credits, AppError> {
        let (genres, links) = tokio::try_join!(
            self.repository.find_genre_names(movie_id),
            self.repository.find_person_links(movie_id)
        )?;

        Ok(Credits::from_links(genres, links))
    }
}
