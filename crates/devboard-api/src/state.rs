//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use devboard_auth::AdminPolicy;
use devboard_auth::jwt::{JwtDecoder, JwtEncoder};
use devboard_auth::password::{PasswordHasher, PasswordValidator};
use devboard_core::config::AppConfig;
use devboard_database::Database;
use devboard_service::{
    AdminNotificationService, AuthService, NotificationService, UserService,
};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Store handles.
    pub database: Database,
    /// Admin allow-list.
    pub admin_policy: Arc<AdminPolicy>,

    /// Registration, login and token resolution.
    pub auth_service: Arc<AuthService>,
    /// Profile reads and updates.
    pub user_service: Arc<UserService>,
    /// The per-user feed.
    pub notification_service: Arc<NotificationService>,
    /// Notification management for admins.
    pub admin_notification_service: Arc<AdminNotificationService>,
}

impl AppState {
    /// Wire every service against the given stores.
    pub fn new(config: AppConfig, database: Database) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&database.users),
            Arc::clone(&database.guests),
            jwt_encoder,
            jwt_decoder,
            Arc::clone(&password_hasher),
            Arc::clone(&password_validator),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&database.users),
            password_hasher,
            password_validator,
        ));
        let notification_service = Arc::new(NotificationService::new(Arc::clone(
            &database.notifications,
        )));
        let admin_notification_service = Arc::new(AdminNotificationService::new(Arc::clone(
            &database.notifications,
        )));

        Self {
            admin_policy: Arc::new(AdminPolicy::new(&config.auth)),
            config: Arc::new(config),
            database,
            auth_service,
            user_service,
            notification_service,
            admin_notification_service,
        }
    }
}
