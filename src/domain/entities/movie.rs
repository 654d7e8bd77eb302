//! Movie entity and the related names attached to it.

use chrono::NaiveDate;
use uuid::Uuid;

use super::person::{PersonLink, PersonRole};

/// A film work stored in the catalog.
///
/// Optional columns stay optional here; response defaults (today's date,
/// zero rating) are applied by the API layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub kind: String,
}

impl Movie {
    /// Creates a new Movie instance.
    pub fn new(
        id: Uuid,
        title: String,
        description: Option<String>,
        creation_date: Option<NaiveDate>,
        rating: Option<f64>,
        kind: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            creation_date,
            rating,
            kind,
        }
    }
}

/// Genre and person names related to a single movie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credits {
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}

impl Credits {
    /// Splits role-links by role, keeping link order and repeated names.
    pub fn from_links(genres: Vec<String>, links: Vec<PersonLink>) -> Self {
        let mut credits = Self {
            genres,
            ..Self::default()
        };

        for link in links {
            match link.role {
                PersonRole::Actor => credits.actors.push(link.full_name),
                PersonRole::Director => credits.directors.push(link.full_name),
                PersonRole::Writer => credits.writers.push(link.full_name),
            }
        }

        credits
    }

    /// Sorts every collection by byte order and drops repeated names.
    ///
    /// Matches `ARRAY_AGG(DISTINCT name COLLATE "C")` in the batched listing
    /// query, whatever the database locale.
    pub fn deduplicated(self) -> Self {
        Self {
            genres: distinct(self.genres),
            actors: distinct(self.actors),
            directors: distinct(self.directors),
            writers: distinct(self.writers),
        }
    }
}

fn distinct(mut names: Vec<String>) -> Vec<String> {
    names.sort_unstable();
    names.dedup();
    names
}

/// A movie together with its related names.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub movie: Movie,
    pub credits: Credits,
}

impl MovieRecord {
    pub fn new(movie: Movie, credits: Credits) -> Self {
        Self { movie, credits }
    }
}
