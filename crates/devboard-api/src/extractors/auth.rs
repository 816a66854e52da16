//! `AuthUser` and `AdminUser` extractors.
//!
//! `AuthUser` pulls the bearer token from the Authorization header and
//! resolves it to a [`RequestContext`]. `AdminUser` additionally checks the
//! resolved email against the admin allow-list.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use devboard_core::error::AppError;
use devboard_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller (user or guest).
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let ctx = state.auth_service.authenticate(token).await?;
        Ok(AuthUser(ctx))
    }
}

/// A registered user whose email is on the admin allow-list.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// The caller's context.
    pub context: RequestContext,
    /// The admin's email, used for `createdBy` and friends.
    pub email: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(context) = AuthUser::from_request_parts(parts, state).await?;
        let email = state
            .admin_policy
            .authorize(context.principal.kind(), context.principal.email())?;
        Ok(AdminUser { context, email })
    }
}
