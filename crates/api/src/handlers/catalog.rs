//! Read-only proxy over the external catalog.
//!
//! Lets clients browse TMDB without holding an API key. Nothing here writes
//! to the database; adding an item goes through `/watchlists` or the catalog
//! resources.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use watchlist_catalog::models::SearchHit;
use watchlist_catalog::TmdbClient;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::error::CoreError;
use watchlist_core::types::ExternalId;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /catalog/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

fn client(state: &AppState) -> AppResult<Arc<TmdbClient>> {
    state.catalog.clone().ok_or(AppError::CatalogUnavailable)
}

/// GET /api/v1/catalog/movies/popular
pub async fn popular_movies(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CatalogPayload>>>> {
    let data = client(&state)?.popular_movies().await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/catalog/movies/upcoming
pub async fn upcoming_movies(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CatalogPayload>>>> {
    let data = client(&state)?.upcoming_movies().await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/catalog/tv/popular
pub async fn popular_tv(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CatalogPayload>>>> {
    let data = client(&state)?.popular_tv().await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/catalog/search?q=
///
/// Movies and TV shows only; other result kinds are dropped.
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<SearchHit>>>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Search query must not be empty".into(),
        )));
    }

    let data = client(&state)?.search(query).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/catalog/movies/{external_id}
pub async fn movie_details(
    State(state): State<AppState>,
    AppPath(external_id): AppPath<ExternalId>,
) -> AppResult<Json<DataResponse<CatalogPayload>>> {
    let data = client(&state)?.movie_details(external_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/catalog/tv/{external_id}
pub async fn tv_details(
    State(state): State<AppState>,
    AppPath(external_id): AppPath<ExternalId>,
) -> AppResult<Json<DataResponse<CatalogPayload>>> {
    let data = client(&state)?.tv_details(external_id).await?;
    Ok(Json(DataResponse { data }))
}
