//! Notification record model and DTOs.
//!
//! Notifications are schedule metadata only; nothing in this system delivers
//! them or sets `sent_at` on its own.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watchlist_core::content::ContentRef;
use watchlist_core::error::CoreError;
use watchlist_core::types::{DbId, Timestamp};

/// Maximum `notification_type` length, matching `VARCHAR(50)`.
pub const MAX_NOTIFICATION_TYPE_LENGTH: usize = 50;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: Option<DbId>,
    pub tv_show_id: Option<DbId>,
    pub notification_type: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn content(&self) -> Result<Option<ContentRef>, CoreError> {
        ContentRef::from_optional_columns(self.movie_id, self.tv_show_id)
    }
}

/// API shape of a notification: the two content columns collapse into a
/// single optional `content` reference (`{"kind": "movie", "id": 7}`).
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub content: Option<ContentRef>,
    pub notification_type: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl TryFrom<Notification> for NotificationResponse {
    type Error = CoreError;

    fn try_from(row: Notification) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            content: row.content()?,
            notification_type: row.notification_type,
            scheduled_at: row.scheduled_at,
            sent_at: row.sent_at,
            created_at: row.created_at,
        })
    }
}

/// DTO for creating a notification record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub movie_id: Option<DbId>,
    pub tv_show_id: Option<DbId>,
    pub notification_type: Option<String>,
    pub scheduled_at: Option<Timestamp>,
}

impl CreateNotification {
    pub fn validate(&self) -> Result<(), CoreError> {
        ContentRef::from_optional_columns(self.movie_id, self.tv_show_id)?;
        validate_notification_type(self.notification_type.as_deref())
    }
}

/// DTO for updating a notification record. All fields are optional.
///
/// Supplying `movie_id` or `tv_show_id` switches the content reference and
/// clears the other column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNotification {
    pub user_id: Option<DbId>,
    pub movie_id: Option<DbId>,
    pub tv_show_id: Option<DbId>,
    pub notification_type: Option<String>,
    pub scheduled_at: Option<Timestamp>,
    pub sent_at: Option<Timestamp>,
}

impl UpdateNotification {
    /// The replacement content reference, if one was supplied.
    pub fn content(&self) -> Result<Option<ContentRef>, CoreError> {
        ContentRef::from_optional_columns(self.movie_id, self.tv_show_id)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.content()?;
        validate_notification_type(self.notification_type.as_deref())
    }
}

fn validate_notification_type(value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(t) if t.chars().count() > MAX_NOTIFICATION_TYPE_LENGTH => {
            Err(CoreError::Validation(format!(
                "notification_type must be at most {MAX_NOTIFICATION_TYPE_LENGTH} characters"
            )))
        }
        _ => Ok(()),
    }
}
