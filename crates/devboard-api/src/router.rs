//! Route definitions for the Devboard HTTP API.
//!
//! Routes are grouped by domain and merged into one router that receives
//! `AppState` via `.with_state(state)`.

use axum::Router;
use axum::routing::{get, patch, post};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route. Layers are added by
/// [`build_app`](crate::app::build_app).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(notification_routes())
        .merge(admin_notification_routes())
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Registration, login and guest sessions
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/guest", post(handlers::auth::guest))
}

fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/profile",
        get(handlers::user::get_profile).put(handlers::user::update_profile),
    )
}

/// The caller's own feed
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/mark-read",
            post(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{id}/dismiss",
            post(handlers::notification::dismiss),
        )
}

/// Admin management; static segments take priority over `{id}`
fn admin_notification_routes() -> Router<AppState> {
    use handlers::admin::{broadcast, notifications};

    Router::new()
        .route("/notifications/admin", post(notifications::create))
        .route("/notifications/admin/check", get(notifications::check))
        .route("/notifications/admin/all", get(notifications::list_all))
        .route("/notifications/admin/stats", get(notifications::stats))
        .route(
            "/notifications/admin/broadcast",
            post(broadcast::send_broadcast),
        )
        .route(
            "/notifications/admin/{id}",
            get(notifications::get_one)
                .patch(notifications::update)
                .delete(notifications::remove),
        )
        .route(
            "/notifications/admin/{id}/deactivate",
            patch(notifications::deactivate),
        )
        .route(
            "/notifications/admin/{id}/activate",
            patch(notifications::activate),
        )
}
