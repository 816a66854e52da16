//! Storage traits the service layer depends on.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`] and
//! an in-memory one in [`crate::memory`].

use std::fmt::Debug;

use async_trait::async_trait;

use devboard_core::result::AppResult;
use devboard_entity::guest::Guest;
use devboard_entity::notification::{
    CreateNotification, MarkField, Notification, UpdateNotification, UserNotification,
    VisibleNotification,
};
use devboard_entity::user::{CreateUser, UpdateUser, User};

/// Registered user persistence.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user. A taken email yields a `Conflict` error.
    async fn create(&self, input: &CreateUser) -> AppResult<User>;

    /// Overwrite a user's profile fields. A missing user yields `NotFound`,
    /// a taken email yields `Conflict`.
    async fn update(&self, input: &UpdateUser) -> AppResult<User>;
}

/// Guest persistence. Guests are never updated.
#[async_trait]
pub trait GuestStore: Send + Sync + Debug + 'static {
    /// Find a guest by session id.
    async fn find_by_session_id(&self, session_id: &str) -> AppResult<Option<Guest>>;

    /// Insert a guest with a caller-generated session id.
    async fn create(&self, name: &str, session_id: &str) -> AppResult<Guest>;
}

/// Notification and per-user mark persistence.
#[async_trait]
pub trait NotificationStore: Send + Sync + Debug + 'static {
    /// Active, unexpired notifications the user has not dismissed, annotated
    /// with the user's read/dismiss flags. Order is unspecified.
    async fn list_feed(&self, user_id: i64) -> AppResult<Vec<VisibleNotification>>;

    /// Number of feed entries the user has not read.
    async fn count_unread(&self, user_id: i64) -> AppResult<i64>;

    /// Insert-or-update the user's mark row, setting only `field` to true.
    async fn set_mark(&self, user_id: i64, notification_id: i64, field: MarkField)
    -> AppResult<()>;

    /// The user's mark row for a notification, if one exists.
    async fn find_mark(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> AppResult<Option<UserNotification>>;

    /// Every notification, newest first.
    async fn find_all(&self) -> AppResult<Vec<Notification>>;

    /// Find a notification by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>>;

    /// Insert a notification.
    async fn create(&self, input: &CreateNotification) -> AppResult<Notification>;

    /// Apply a partial update. Returns `None` when the notification is gone.
    async fn update(&self, id: i64, input: &UpdateNotification)
    -> AppResult<Option<Notification>>;

    /// Hard-delete a notification and its mark rows. Returns whether a row
    /// was removed.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
