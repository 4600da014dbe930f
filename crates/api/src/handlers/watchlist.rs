//! Handlers for the `/watchlists` resource.
//!
//! Every endpoint requires authentication and only ever touches the caller's
//! own entries. Content payloads are resolved into local catalog rows before
//! the entry is written.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use watchlist_core::catalog::CatalogPayload;
use watchlist_core::content::ContentRef;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_core::watch_status::WatchStatus;
use watchlist_core::watchlist::{ensure_owner, parse_content_type, require_content, select_content};
use watchlist_db::models::movie::Movie;
use watchlist_db::models::tv_show::TvShow;
use watchlist_db::models::watchlist_entry::{
    CreateWatchlistEntry, UpdateWatchlistEntry, WatchlistEntry, WatchlistEntryResponse,
};
use watchlist_db::repositories::{MovieRepo, TvShowRepo, WatchlistRepo};
use watchlist_db::resolver::CatalogResolver;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /watchlists` and `PUT /watchlists/{id}`.
///
/// `status` and `content_type` treat `""` like an absent field. `null`
/// content data counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct WatchlistRequest {
    pub status: Option<String>,
    pub content_type: Option<String>,
    pub movie_data: Option<CatalogPayload>,
    pub tv_data: Option<CatalogPayload>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load an entry and verify the caller owns it.
///
/// Existence is checked first, so a missing entry is 404 for everyone and
/// another user's entry is 403.
async fn find_and_authorize(pool: &PgPool, id: DbId, auth: &AuthUser) -> AppResult<WatchlistEntry> {
    let entry = WatchlistRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WatchlistEntry",
            id,
        }))?;

    ensure_owner(entry.user_id, auth.user_id, "watchlist entry")?;
    Ok(entry)
}

/// Join one entry with its catalog row.
async fn load_response(pool: &PgPool, entry: WatchlistEntry) -> AppResult<WatchlistEntryResponse> {
    let (movie, tv_show) = match entry.content()? {
        ContentRef::Movie(id) => (MovieRepo::find_by_id(pool, id).await?, None),
        ContentRef::TvShow(id) => (None, TvShowRepo::find_by_id(pool, id).await?),
    };
    Ok(WatchlistEntryResponse::new(entry, movie, tv_show)?)
}

/// Join many entries with their catalog rows using one lookup per table.
async fn load_responses(
    pool: &PgPool,
    entries: Vec<WatchlistEntry>,
) -> AppResult<Vec<WatchlistEntryResponse>> {
    let mut movie_ids = Vec::new();
    let mut tv_show_ids = Vec::new();
    for entry in &entries {
        match entry.content()? {
            ContentRef::Movie(id) => movie_ids.push(id),
            ContentRef::TvShow(id) => tv_show_ids.push(id),
        }
    }

    let movies: HashMap<DbId, Movie> = MovieRepo::find_by_ids(pool, &movie_ids)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();
    let tv_shows: HashMap<DbId, TvShow> = TvShowRepo::find_by_ids(pool, &tv_show_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    // Several entries may share one catalog row, hence the clones.
    entries
        .into_iter()
        .map(|entry| -> AppResult<WatchlistEntryResponse> {
            let (movie, tv_show) = match entry.content()? {
                ContentRef::Movie(id) => (movies.get(&id).cloned(), None),
                ContentRef::TvShow(id) => (None, tv_shows.get(&id).cloned()),
            };
            Ok(WatchlistEntryResponse::new(entry, movie, tv_show)?)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/watchlists
///
/// The caller's entries, newest first, each joined with its movie or TV show.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WatchlistEntryResponse>>>> {
    let entries = WatchlistRepo::list_for_user(&state.pool, auth.user_id).await?;
    let data = load_responses(&state.pool, entries).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/watchlists/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<WatchlistEntryResponse>>> {
    let entry = find_and_authorize(&state.pool, id, &auth).await?;
    let data = load_response(&state.pool, entry).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/watchlists
///
/// Resolve the supplied movie or TV show payload, then link it to the caller.
/// Status defaults to `planned`. Returns 201 with the joined entry.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<WatchlistRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<WatchlistEntryResponse>>)> {
    let status = WatchStatus::parse_optional(input.status.as_deref())?.unwrap_or_default();
    let content_type = parse_content_type(input.content_type.as_deref())?;
    let (kind, payload) = require_content(content_type, input.movie_data, input.tv_data)?;

    let resolution = CatalogResolver::resolve(&state.pool, kind, &payload).await?;
    let entry = WatchlistRepo::create(
        &state.pool,
        &CreateWatchlistEntry {
            user_id: auth.user_id,
            content: resolution.content.content_ref(),
            status,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        entry_id = entry.id,
        kind = %kind,
        "Watchlist entry created",
    );

    let (movie, tv_show) = resolution.content.into_parts();
    let data = WatchlistEntryResponse::new(entry, movie, tv_show)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /api/v1/watchlists/{id}
///
/// Absent or empty status keeps the stored one. Supplied content is
/// re-resolved and replaces the entry's reference, clearing the other kind.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<WatchlistRequest>,
) -> AppResult<Json<DataResponse<WatchlistEntryResponse>>> {
    find_and_authorize(&state.pool, id, &auth).await?;

    let status = WatchStatus::parse_optional(input.status.as_deref())?;
    let content_type = parse_content_type(input.content_type.as_deref())?;
    let selected = select_content(content_type, input.movie_data, input.tv_data)?;

    let resolved = match selected {
        Some((kind, payload)) => Some(CatalogResolver::resolve(&state.pool, kind, &payload).await?),
        None => None,
    };

    let entry = WatchlistRepo::update(
        &state.pool,
        id,
        &UpdateWatchlistEntry {
            status,
            content: resolved.as_ref().map(|r| r.content.content_ref()),
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "WatchlistEntry",
        id,
    }))?;

    let data = match resolved {
        Some(resolution) => {
            let (movie, tv_show) = resolution.content.into_parts();
            WatchlistEntryResponse::new(entry, movie, tv_show)?
        }
        None => load_response(&state.pool, entry).await?,
    };
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/watchlists/{id}
///
/// Removes the entry only; the catalog row stays.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    find_and_authorize(&state.pool, id, &auth).await?;

    if WatchlistRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = auth.user_id, entry_id = id, "Watchlist entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WatchlistEntry",
            id,
        }))
    }
}
