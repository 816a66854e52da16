//! User self-service handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::UserResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(user.into()))
}

/// PUT /users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_service
        .update_profile(&auth, req.into_input()?)
        .await?;
    Ok(Json(user.into()))
}
