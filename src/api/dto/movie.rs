//! DTOs for the movie listing and detail endpoints.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::application::services::MoviePage;
use crate::domain::entities::MovieRecord;

/// Query parameters for `GET /movies/`.
///
/// `page` is kept as a raw string: besides integers it accepts `"last"`.
#[derive(Debug, Default, PartialEq)]
pub struct MovieListParams {
    pub page: Option<String>,
}

impl MovieListParams {
    /// Picks parameters out of decoded query pairs. When `page` repeats, the
    /// last value wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .filter(|(key, _)| key == "page")
            .map(|(_, value)| value)
            .last();

        Self { page }
    }
}

/// Flat JSON representation of a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// ISO date; today's date when the catalog has none.
    pub creation_date: String,
    /// Zero when the catalog has no rating.
    pub rating: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}

impl MovieResponse {
    /// Builds the response, using `today` for a missing creation date.
    pub fn from_record(record: MovieRecord, today: NaiveDate) -> Self {
        let MovieRecord { movie, credits } = record;

        Self {
            id: movie.id.to_string(),
            title: movie.title,
            description: movie.description,
            creation_date: movie
                .creation_date
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string(),
            rating: movie.rating.unwrap_or(0.0),
            kind: movie.kind,
            genres: credits.genres,
            actors: credits.actors,
            directors: credits.directors,
            writers: credits.writers,
        }
    }
}

impl From<MovieRecord> for MovieResponse {
    fn from(record: MovieRecord) -> Self {
        Self::from_record(record, Utc::now().date_naive())
    }
}

/// Page object returned by `GET /movies/`.
#[derive(Debug, Serialize)]
pub struct MoviePageResponse {
    pub count: u64,
    pub total_pages: u64,
    pub prev: Option<u64>,
    pub next: Option<u64>,
    pub results: Vec<MovieResponse>,
}

impl From<MoviePage> for MoviePageResponse {
    fn from(page: MoviePage) -> Self {
        let today = Utc::now().date_naive();

        Self {
            count: page.count,
            total_pages: page.window.total_pages,
            prev: page.window.prev(),
            next: page.window.next(),
            results: page
                .results
                .into_iter()
                .map(|record| MovieResponse::from_record(record, today))
                .collect(),
        }
    }
}
