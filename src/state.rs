//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MovieService;
use crate::domain::repositories::CatalogRepository;

/// Movie service over a type-erased catalog store.
pub type SharedMovieService = Arc<MovieService<dyn CatalogRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub movie_service: SharedMovieService,
}

impl AppState {
    pub fn new(movie_service: SharedMovieService) -> Self {
        Self { movie_service }
    }
}
