//! Repository for the `watchlist_entries` table.

use sqlx::PgPool;
use watchlist_core::types::DbId;

use crate::models::watchlist_entry::{CreateWatchlistEntry, UpdateWatchlistEntry, WatchlistEntry};

/// Column list for `watchlist_entries` queries.
const COLUMNS: &str = "id, user_id, movie_id, tv_show_id, status, created_at, updated_at";

/// Provides CRUD operations for watchlist entries.
///
/// Ownership is not checked here; handlers load the entry and compare
/// `user_id` before mutating.
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWatchlistEntry,
    ) -> Result<WatchlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO watchlist_entries (user_id, movie_id, tv_show_id, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(input.user_id)
            .bind(input.content.movie_id())
            .bind(input.content.tv_show_id())
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an entry by ID regardless of owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WatchlistEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM watchlist_entries WHERE id = $1");
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's entries, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WatchlistEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM watchlist_entries \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an entry. `None` fields are left unchanged; a new content
    /// reference overwrites both content columns.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWatchlistEntry,
    ) -> Result<Option<WatchlistEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE watchlist_entries SET \
                status = COALESCE($2, status), \
                movie_id = CASE WHEN $3 THEN $4 ELSE movie_id END, \
                tv_show_id = CASE WHEN $3 THEN $5 ELSE tv_show_id END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(id)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.content.is_some())
            .bind(input.content.and_then(|c| c.movie_id()))
            .bind(input.content.and_then(|c| c.tv_show_id()))
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an entry. The referenced catalog row is left in place.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM watchlist_entries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
