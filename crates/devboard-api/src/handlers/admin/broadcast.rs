//! Admin broadcast handler.
//!
//! A broadcast is a create that is reported back with who sent it and when.
//! Clients pick it up on their next feed poll.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;

use crate::dto::request::CreateNotificationRequest;
use crate::dto::response::annotated;
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ValidatedJson};
use crate::state::AppState;

/// POST /notifications/admin/broadcast
pub async fn send_broadcast(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateNotificationRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let notification = state
        .admin_notification_service
        .create(req.into_create()?)
        .await?;

    info!(
        notification_id = notification.id,
        admin = %admin.email,
        "Notification broadcast"
    );

    let body = annotated(
        &notification,
        json!({
            "broadcastBy": admin.email,
            "broadcastAt": Utc::now(),
            "message": "Notification broadcast to all users",
        }),
    )?;
    Ok((StatusCode::CREATED, Json(body)))
}
