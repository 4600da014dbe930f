//! Route definitions for the `/catalog` proxy.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`. All are read-only.
///
/// ```text
/// GET    /movies/popular          -> popular_movies
/// GET    /movies/upcoming         -> upcoming_movies
/// GET    /movies/{external_id}    -> movie_details
/// GET    /tv/popular              -> popular_tv
/// GET    /tv/{external_id}        -> tv_details
/// GET    /search                  -> search (?q)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/popular", get(catalog::popular_movies))
        .route("/movies/upcoming", get(catalog::upcoming_movies))
        .route("/movies/{external_id}", get(catalog::movie_details))
        .route("/tv/popular", get(catalog::popular_tv))
        .route("/tv/{external_id}", get(catalog::tv_details))
        .route("/search", get(catalog::search))
}
