//! Auth handlers: register, login, guest.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{GuestRequest, LoginRequest, RegisterRequest};
use crate::dto::response::{GuestAuthResponse, UserAuthResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserAuthResponse>)> {
    let session = state.auth_service.register(req.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<UserAuthResponse>> {
    let session = state.auth_service.login(&req.email, &req.password).await?;
    Ok(Json(session.into()))
}

/// POST /auth/guest
pub async fn guest(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<GuestRequest>,
) -> ApiResult<(StatusCode, Json<GuestAuthResponse>)> {
    let session = state.auth_service.guest(req.name.trim()).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}
