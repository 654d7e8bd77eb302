//! Handler for the paginated movie listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::movie::{MovieListParams, MoviePageResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists movies, 50 per page, with aggregated genre and person names.
///
/// # Endpoint
///
/// `GET /movies/`
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number or `last` (default: 1).
///   Values below 1 and non-numeric values fall back to page 1; values past
///   the end return the last page. When `page` repeats, the last value is used.
///
/// # Response
///
/// ```json
/// {
///   "count": 51,
///   "total_pages": 2,
///   "prev": null,
///   "next": 2,
///   "results": [ ... ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a numeric page cannot be converted to an integer.
pub async fn movie_list_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MoviePageResponse>, AppError> {
    let Query(pairs) = query?;
    let params = MovieListParams::from_pairs(pairs);

    let page = state
        .movie_service
        .list_movies(params.page.as_deref())
        .await?;

    Ok(Json(page.into()))
}
