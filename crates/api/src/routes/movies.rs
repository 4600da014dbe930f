//! Route definitions for the `/movies` resource.
//!
//! There is no update or delete: movie rows change only through the resolver.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> resolve
/// GET    /{id}        -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::resolve))
        .route("/{id}", get(movies::get_by_id))
}
