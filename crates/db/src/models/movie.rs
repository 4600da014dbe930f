//! Movie entity model.

use serde::Serialize;
use sqlx::FromRow;
use watchlist_core::catalog::serialize_genre_ids;
use watchlist_core::types::{Date, DbId, ExternalId, Timestamp};

/// A row from the `movies` table.
///
/// Written only by the catalog resolver; `genre_ids` holds JSON array text
/// and is exposed as an integer array.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub external_id: ExternalId,
    pub title: String,
    #[serde(serialize_with = "serialize_genre_ids")]
    pub genre_ids: Option<String>,
    pub release_date: Option<Date>,
    pub summary: Option<String>,
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
