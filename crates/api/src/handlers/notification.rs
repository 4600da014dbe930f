//! Handlers for the `/notifications` resource.
//!
//! Notification records are plain metadata. Unknown user or catalog ids are
//! rejected by the foreign keys and surface as 400.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use watchlist_core::error::CoreError;
use watchlist_core::types::DbId;
use watchlist_db::models::notification::{
    CreateNotification, NotificationResponse, UpdateNotification,
};
use watchlist_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    pub user_id: Option<DbId>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Notification",
        id,
    })
}

/// GET /api/v1/notifications?user_id=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NotificationListParams>,
) -> AppResult<Json<DataResponse<Vec<NotificationResponse>>>> {
    let data = NotificationRepo::list(&state.pool, params.user_id)
        .await?
        .into_iter()
        .map(NotificationResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/notifications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<NotificationResponse>>> {
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: NotificationResponse::try_from(notification)?,
    }))
}

/// POST /api/v1/notifications
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNotification>,
) -> AppResult<(StatusCode, Json<DataResponse<NotificationResponse>>)> {
    input.validate()?;

    let notification = NotificationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        notification_id = notification.id,
        user_id = notification.user_id,
        "Notification created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: NotificationResponse::try_from(notification)?,
        }),
    ))
}

/// PUT /api/v1/notifications/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNotification>,
) -> AppResult<Json<DataResponse<NotificationResponse>>> {
    input.validate()?;

    let notification = NotificationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: NotificationResponse::try_from(notification)?,
    }))
}

/// DELETE /api/v1/notifications/{id}
pub async fn delete(State(state): State<AppState>, AppPath(id): AppPath<DbId>) -> AppResult<StatusCode> {
    if NotificationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
