#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use movies_api::api::handlers::{health_handler, movie_detail_handler, movie_list_handler};
use movies_api::application::services::{MovieService, MovieServiceOptions};
use movies_api::domain::entities::{Credits, Movie, MovieRecord, PersonLink, PersonRole};
use movies_api::domain::repositories::CatalogRepository;
use movies_api::error::AppError;
use movies_api::state::AppState;

/// Catalog store kept in memory, ordered by identifier like the SQL store.
#[derive(Default)]
pub struct InMemoryCatalog {
    movies: Vec<Movie>,
    genres: HashMap<Uuid, Vec<String>>,
    links: HashMap<Uuid, Vec<PersonLink>>,
    unavailable: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every query fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn add_movie(&mut self, title: &str) -> Uuid {
        self.insert(Movie::new(
            Uuid::new_v4(),
            title.to_string(),
            None,
            None,
            None,
            "movie".to_string(),
        ))
    }

    pub fn add_dated_movie(&mut self, title: &str, date: NaiveDate, rating: f64) -> Uuid {
        self.insert(Movie::new(
            Uuid::new_v4(),
            title.to_string(),
            Some(format!("About {title}")),
            Some(date),
            Some(rating),
            "movie".to_string(),
        ))
    }

    pub fn add_genre(&mut self, movie_id: Uuid, name: &str) {
        self.genres
            .entry(movie_id)
            .or_default()
            .push(name.to_string());
    }

    pub fn add_person(&mut self, movie_id: Uuid, name: &str, role: PersonRole) {
        self.links
            .entry(movie_id)
            .or_default()
            .push(PersonLink::new(Uuid::new_v4(), name.to_string(), role));
    }

    fn insert(&mut self, movie: Movie) -> Uuid {
        let id = movie.id;
        let pos = self.movies.partition_point(|m| m.id < id);
        self.movies.insert(pos, movie);
        id
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::internal("Internal server error"));
        }
        Ok(())
    }

    fn page(&self, offset: i64, limit: i64) -> Vec<Movie> {
        self.movies
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    fn credits(&self, movie_id: Uuid) -> Credits {
        Credits::from_links(
            self.genres.get(&movie_id).cloned().unwrap_or_default(),
            self.links.get(&movie_id).cloned().unwrap_or_default(),
        )
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn count_movies(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.movies.len() as i64)
    }

    async fn list_movies_aggregated(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<MovieRecord>, AppError> {
        self.check()?;
        Ok(self
            .page(offset, limit)
            .into_iter()
            .map(|movie| {
                let credits = self.credits(movie.id).deduplicated();
                MovieRecord::new(movie, credits)
            })
            .collect())
    }

    async fn list_movies(&self, offset: i64, limit: i64) -> Result<Vec<Movie>, AppError> {
        self.check()?;
        Ok(self.page(offset, limit))
    }

    async fn find_movie(&self, id: Uuid) -> Result<Option<Movie>, AppError> {
        self.check()?;
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn find_person_links(&self, movie_id: Uuid) -> Result<Vec<PersonLink>, AppError> {
        self.check()?;
        Ok(self.links.get(&movie_id).cloned().unwrap_or_default())
    }

    async fn find_genre_names(&self, movie_id: Uuid) -> Result<Vec<String>, AppError> {
        self.check()?;
        Ok(self.genres.get(&movie_id).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state(catalog: InMemoryCatalog, options: MovieServiceOptions) -> AppState {
    let repository: Arc<dyn CatalogRepository> = Arc::new(catalog);
    AppState::new(Arc::new(MovieService::with_options(repository, options)))
}

/// Test server with the catalog and health routes mounted.
pub fn create_test_server(catalog: InMemoryCatalog, options: MovieServiceOptions) -> TestServer {
    let app = Router::new()
        .route("/movies", get(movie_list_handler))
        .route("/movies/{id}", get(movie_detail_handler))
        .route("/health", get(health_handler))
        .with_state(create_test_state(catalog, options));

    TestServer::new(app).unwrap()
}

/// Catalog with `n` movies titled `Movie 1`..`Movie n`.
pub fn catalog_with_movies(n: usize) -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for i in 1..=n {
        catalog.add_movie(&format!("Movie {i}"));
    }
    catalog
}

// ── PostgreSQL seeding ─────────────────────────────────────────────────────

pub async fn create_test_movie(pool: &PgPool, title: &str, rating: Option<f64>) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO film_work (id, title, description, creation_date, rating, type) \
         VALUES ($1, $2, $3, $4, $5, 'movie')",
    )
    .bind(id)
    .bind(title)
    .bind(format!("About {title}"))
    .bind(NaiveDate::from_ymd_opt(1999, 3, 31))
    .bind(rating)
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn create_test_genre(pool: &PgPool, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO genre (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn create_test_person(pool: &PgPool, full_name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO person (id, full_name) VALUES ($1, $2)")
        .bind(id)
        .bind(full_name)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn link_genre(pool: &PgPool, movie_id: Uuid, genre_id: Uuid) {
    sqlx::query("INSERT INTO genre_film_work (id, genre_id, film_work_id) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(genre_id)
        .bind(movie_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn link_person(pool: &PgPool, movie_id: Uuid, person_id: Uuid, role: &str) {
    sqlx::query(
        "INSERT INTO person_film_work (id, person_id, film_work_id, role) VALUES ($1, $2, $3, $4)",
    )
    .bind(Uuid::new_v4())
    .bind(person_id)
    .bind(movie_id)
    .bind(role)
    .execute(pool)
    .await
    .unwrap();
}
