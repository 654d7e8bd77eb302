//! Handler for a single movie.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::movie::MovieResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one movie with its genres, actors, directors and writers.
///
/// # Endpoint
///
/// `GET /movies/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if `id` is not a valid UUID or no movie has it.
pub async fn movie_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, AppError> {
    let record = state.movie_service.get_movie(&id).await?;

    Ok(Json(record.into()))
}
