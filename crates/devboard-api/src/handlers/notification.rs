//! Feed handlers for the current user.

use axum::Json;
use axum::extract::{Path, State};

use devboard_entity::notification::VisibleNotification;

use crate::dto::request::MarkReadRequest;
use crate::dto::response::{CountResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<VisibleNotification>>> {
    let feed = state.notification_service.list_for(&auth).await?;
    Ok(Json(feed))
}

/// GET /notifications/unread-count
pub async fn unread_count(State(state): State<AppState>, auth: AuthUser) -> Json<CountResponse> {
    let count = state.notification_service.unread_count(&auth).await;
    Json(CountResponse { count })
}

/// POST /notifications/mark-read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<MarkReadRequest>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .notification_service
        .mark_as_read(&auth, &req.notification_ids)
        .await?;
    Ok(Json(MessageResponse::new("Notifications marked as read")))
}

/// POST /notifications/{id}/dismiss
pub async fn dismiss(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.notification_service.dismiss(&auth, id).await?;
    Ok(Json(MessageResponse::new("Notification dismissed")))
}
