//! PostgreSQL implementation of the catalog repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Credits, Movie, MovieRecord, PersonLink, PersonRole};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    creation_date: Option<NaiveDate>,
    rating: Option<f64>,
    kind: String,
}

impl From<MovieRow> for Movie {
    fn from(r: MovieRow) -> Self {
        Movie::new(
            r.id,
            r.title,
            r.description,
            r.creation_date,
            r.rating,
            r.kind,
        )
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AggregatedMovieRow {
    #[sqlx(flatten)]
    movie: MovieRow,
    genres: Vec<String>,
    actors: Vec<String>,
    directors: Vec<String>,
    writers: Vec<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct PersonLinkRow {
    person_id: Uuid,
    full_name: String,
    role: String,
}

/// PostgreSQL repository for the movie catalog.
///
/// Reads `film_work`, `genre`, `person` and their link tables. Listing
/// queries page over `film_work` ordered by `id`.
pub struct PgCatalogRepository {
    pool: Arc<PgPool>,
}

impl PgCatalogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn count_movies(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM film_work")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_movies_aggregated(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<MovieRecord>, AppError> {
        // Page first, then join, so LIMIT applies to movies rather than to
        // joined link rows. Names aggregate in "C" collation (byte order), the
        // same order `Credits::deduplicated` produces.
        let rows = sqlx::query_as::<_, AggregatedMovieRow>(
            r#"
            SELECT
                fw.id,
                fw.title,
                fw.description,
                fw.creation_date,
                fw.rating,
                fw.type AS kind,
                COALESCE(
                    ARRAY_AGG(DISTINCT g.name COLLATE "C" ORDER BY g.name COLLATE "C")
                        FILTER (WHERE g.name IS NOT NULL),
                    '{}'
                ) AS genres,
                COALESCE(
                    ARRAY_AGG(DISTINCT p.full_name COLLATE "C" ORDER BY p.full_name COLLATE "C")
                        FILTER (WHERE pfw.role = 'actor' AND p.full_name IS NOT NULL),
                    '{}'
                ) AS actors,
                COALESCE(
                    ARRAY_AGG(DISTINCT p.full_name COLLATE "C" ORDER BY p.full_name COLLATE "C")
                        FILTER (WHERE pfw.role = 'director' AND p.full_name IS NOT NULL),
                    '{}'
                ) AS directors,
                COALESCE(
                    ARRAY_AGG(DISTINCT p.full_name COLLATE "C" ORDER BY p.full_name COLLATE "C")
                        FILTER (WHERE pfw.role = 'writer' AND p.full_name IS NOT NULL),
                    '{}'
                ) AS writers
            FROM (
                SELECT id, title, description, creation_date, rating, type
                FROM film_work
                ORDER BY id
                LIMIT $1 OFFSET $2
            ) fw
            LEFT JOIN genre_film_work gfw ON gfw.film_work_id = fw.id
            LEFT JOIN genre g ON g.id = gfw.genre_id
            LEFT JOIN person_film_work pfw ON pfw.film_work_id = fw.id
            LEFT JOIN person p ON p.id = pfw.person_id
            GROUP BY fw.id, fw.title, fw.description, fw.creation_date, fw.rating, fw.type
            ORDER BY fw.id
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let credits = Credits {
                    genres: r.genres,
                    actors: r.actors,
                    directors: r.directors,
                    writers: r.writers,
                };
                MovieRecord::new(r.movie.into(), credits)
            })
            .collect())
    }

    async fn list_movies(&self, offset: i64, limit: i64) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, description, creation_date, rating, type AS kind
            FROM film_work
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_movie(&self, id: Uuid) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT id, title, description, creation_date, rating, type AS kind
            FROM film_work
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn find_person_links(&self, movie_id: Uuid) -> Result<Vec<PersonLink>, AppError> {
        let rows = sqlx::query_as::<_, PersonLinkRow>(
            r#"
            SELECT p.id AS person_id, p.full_name, pfw.role
            FROM person_film_work pfw
            JOIN person p ON p.id = pfw.person_id
            WHERE pfw.film_work_id = $1
            ORDER BY pfw.created, pfw.id
            "#,
        )
        .bind(movie_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|r| match r.role.parse::<PersonRole>() {
                Ok(role) => Some(PersonLink::new(r.person_id, r.full_name, role)),
                Err(e) => {
                    tracing::warn!(%movie_id, person_id = %r.person_id, "Skipping link: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn find_genre_names(&self, movie_id: Uuid) -> Result<Vec<String>, AppError> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT g.name
            FROM genre_film_work gfw
            JOIN genre g ON g.id = gfw.genre_id
            WHERE gfw.film_work_id = $1
            ORDER BY g.name COLLATE "C"
            "#,
        )
        .bind(movie_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(names)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
