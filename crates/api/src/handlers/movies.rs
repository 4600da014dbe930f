//! Handlers for the `/movies` resource.
//!
//! Movies are created and refreshed only through the catalog resolver; there
//! is no update-by-id or delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_db::models::movie::Movie;
use watchlist_db::repositories::MovieRepo;
use watchlist_db::resolver::CatalogResolver;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
///
/// Upsert a catalog payload by external id. Returns 201 when a new row was
/// created, 200 when an existing one was refreshed.
pub async fn resolve(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CatalogPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<Movie>>)> {
    let upserted = CatalogResolver::resolve_movie(&state.pool, &payload).await?;
    let status = if upserted.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: upserted.row })))
}
