//! Handlers for the `/tv-shows` resource.
//!
//! TV shows are created and refreshed only through the catalog resolver; there
//! is no update-by-id or delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_db::models::tv_show::TvShow;
use watchlist_db::repositories::TvShowRepo;
use watchlist_db::resolver::CatalogResolver;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tv-shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TvShow>>>> {
    let shows = TvShowRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// GET /api/v1/tv-shows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<TvShow>>> {
    let show = TvShowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TvShow",
            id,
        }))?;
    Ok(Json(DataResponse { data: show }))
}

/// POST /api/v1/tv-shows
///
/// Upsert a catalog payload by external id. Returns 201 when a new row was
/// created, 200 when an existing one was refreshed.
pub async fn resolve(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CatalogPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<TvShow>>)> {
    let upserted = CatalogResolver::resolve_tv_show(&state.pool, &payload).await?;
    let status = if upserted.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: upserted.row })))
}
