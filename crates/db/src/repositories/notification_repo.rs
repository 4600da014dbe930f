//! Repository for the `notifications` table.

use sqlx::PgPool;
use watchlist_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification, UpdateNotification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, movie_id, tv_show_id, notification_type, scheduled_at, \
                        sent_at, created_at";

/// Provides CRUD operations for notification records.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications \
                (user_id, movie_id, tv_show_id, notification_type, scheduled_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(input.movie_id)
            .bind(input.tv_show_id)
            .bind(&input.notification_type)
            .bind(input.scheduled_at)
            .fetch_one(pool)
            .await
    }

    /// Find a notification by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notifications, newest first, optionally restricted to one user.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<DbId>,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a notification. Only non-`None` fields in `input` are applied;
    /// a supplied `movie_id` or `tv_show_id` replaces both content columns.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotification,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let switch_content = input.movie_id.is_some() || input.tv_show_id.is_some();
        let query = format!(
            "UPDATE notifications SET \
                user_id = COALESCE($2, user_id), \
                movie_id = CASE WHEN $3 THEN $4 ELSE movie_id END, \
                tv_show_id = CASE WHEN $3 THEN $5 ELSE tv_show_id END, \
                notification_type = COALESCE($6, notification_type), \
                scheduled_at = COALESCE($7, scheduled_at), \
                sent_at = COALESCE($8, sent_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(switch_content)
            .bind(input.movie_id)
            .bind(input.tv_show_id)
            .bind(&input.notification_type)
            .bind(input.scheduled_at)
            .bind(input.sent_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a notification. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
