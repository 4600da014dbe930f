//! TV show entity model.

use serde::Serialize;
use sqlx::FromRow;
use watchlist_core::catalog::serialize_genre_ids;
use watchlist_core::types::{Date, DbId, ExternalId, Timestamp};

/// A row from the `tv_shows` table.
///
/// `start_date` is the catalog's first air date, `end_date` its last.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TvShow {
    pub id: DbId,
    pub external_id: ExternalId,
    pub title: String,
    #[serde(serialize_with = "serialize_genre_ids")]
    pub genre_ids: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub summary: Option<String>,
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
