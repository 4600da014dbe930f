//! Watchlist entry model, write inputs, and the joined response shape.

use serde::Serialize;
use sqlx::FromRow;
use watchlist_core::content::{ContentKind, ContentRef};
use watchlist_core::error::CoreError;
use watchlist_core::types::{DbId, Timestamp};
use watchlist_core::watch_status::WatchStatus;

use super::movie::Movie;
use super::tv_show::TvShow;

/// A row from the `watchlist_entries` table.
#[derive(Debug, Clone, FromRow)]
pub struct WatchlistEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: Option<DbId>,
    pub tv_show_id: Option<DbId>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl WatchlistEntry {
    /// The referenced catalog item. The table CHECK guarantees exactly one.
    pub fn content(&self) -> Result<ContentRef, CoreError> {
        ContentRef::from_columns(self.movie_id, self.tv_show_id)
    }

    pub fn status(&self) -> Result<WatchStatus, CoreError> {
        self.status.parse()
    }
}

/// Input for inserting a watchlist entry.
#[derive(Debug, Clone, Copy)]
pub struct CreateWatchlistEntry {
    pub user_id: DbId,
    pub content: ContentRef,
    pub status: WatchStatus,
}

/// Input for updating a watchlist entry. `None` leaves the column unchanged;
/// a new `content` replaces the reference and clears the other column.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateWatchlistEntry {
    pub status: Option<WatchStatus>,
    pub content: Option<ContentRef>,
}

/// A watchlist entry joined with the catalog item it references.
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistEntryResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub status: WatchStatus,
    pub content_type: ContentKind,
    pub movie_id: Option<DbId>,
    pub tv_show_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub movie: Option<Movie>,
    pub tv_show: Option<TvShow>,
}

impl WatchlistEntryResponse {
    /// Combine an entry with its looked-up content. A missing catalog row
    /// leaves the matching field `None`.
    pub fn new(
        entry: WatchlistEntry,
        movie: Option<Movie>,
        tv_show: Option<TvShow>,
    ) -> Result<Self, CoreError> {
        let content = entry.content()?;
        let status = entry.status()?;
        Ok(Self {
            id: entry.id,
            user_id: entry.user_id,
            status,
            content_type: content.kind(),
            movie_id: content.movie_id(),
            tv_show_id: content.tv_show_id(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            movie,
            tv_show,
        })
    }
}
