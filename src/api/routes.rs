//! Catalog route configuration.

use crate::api::handlers::{movie_detail_handler, movie_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only catalog routes.
///
/// # Endpoints
///
/// - `GET /movies`        - Paginated movie listing (`?page=N|last`)
/// - `GET /movies/{id}`   - A single movie by UUID
///
/// Trailing slashes are trimmed before routing, so `/movies/` reaches the
/// listing.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie_list_handler))
        .route("/movies/{id}", get(movie_detail_handler))
}
