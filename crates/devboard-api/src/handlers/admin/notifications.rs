//! Admin notification management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{Value, json};

use devboard_entity::notification::Notification;
use devboard_service::NotificationStats;

use crate::dto::request::{CreateNotificationRequest, UpdateNotificationRequest};
use crate::dto::response::{AdminCheckResponse, DeleteResponse, annotated};
use crate::error::ApiResult;
use crate::extractors::{AdminUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /notifications/admin/check
pub async fn check(admin: AdminUser) -> Json<AdminCheckResponse> {
    Json(AdminCheckResponse {
        is_admin: true,
        email: admin.email,
        message: "You have admin access".to_string(),
    })
}

/// POST /notifications/admin
pub async fn create(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateNotificationRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let notification = state
        .admin_notification_service
        .create(req.into_create()?)
        .await?;
    let body = annotated(&notification, json!({ "createdBy": admin.email }))?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /notifications/admin/all
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<Notification>>> {
    let all = state.admin_notification_service.find_all().await?;
    Ok(Json(all))
}

/// GET /notifications/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<NotificationStats>> {
    let stats = state.admin_notification_service.stats().await?;
    Ok(Json(stats))
}

/// GET /notifications/admin/{id}
pub async fn get_one(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Notification>> {
    let notification = state
        .admin_notification_service
        .find_one(parse_id(&id)?)
        .await?;
    Ok(Json(notification))
}

/// PATCH /notifications/admin/{id}
pub async fn update(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateNotificationRequest>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    let notification = state
        .admin_notification_service
        .update(id, req.into_update()?)
        .await?;
    let body = annotated(&notification, json!({ "updatedBy": admin.email }))?;
    Ok(Json(body))
}

/// PATCH /notifications/admin/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let notification = state
        .admin_notification_service
        .deactivate(parse_id(&id)?)
        .await?;
    let body = annotated(
        &notification,
        json!({
            "deactivatedBy": admin.email,
            "message": "Notification deactivated successfully",
        }),
    )?;
    Ok(Json(body))
}

/// PATCH /notifications/admin/{id}/activate
pub async fn activate(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let notification = state
        .admin_notification_service
        .activate(parse_id(&id)?)
        .await?;
    let body = annotated(
        &notification,
        json!({
            "activatedBy": admin.email,
            "message": "Notification activated successfully",
        }),
    )?;
    Ok(Json(body))
}

/// DELETE /notifications/admin/{id}
pub async fn remove(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state
        .admin_notification_service
        .remove(parse_id(&id)?)
        .await?;
    Ok(Json(DeleteResponse {
        message: "Notification deleted successfully".to_string(),
        deleted_by: admin.email,
        deleted_at: Utc::now(),
    }))
}
