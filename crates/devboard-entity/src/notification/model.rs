//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::NotificationType;
use super::priority::NotificationPriority;

/// An admin-authored notification shown to every registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: i64,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification type.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Severity.
    pub priority: NotificationPriority,
    /// Inactive notifications are hidden from every feed.
    pub is_active: bool,
    /// When the notification stops being shown.
    pub expires_at: Option<DateTime<Utc>>,
    /// Optional call-to-action link.
    pub action_url: Option<String>,
    /// Label for the call-to-action link.
    pub action_text: Option<String>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map(|exp| exp <= now).unwrap_or(false)
    }

    /// Active and not expired.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired_at(now)
    }

    /// Apply a partial update in place. Timestamps are left to the store.
    pub fn apply(&mut self, update: &UpdateNotification) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(message) = &update.message {
            self.message = message.clone();
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(expires_at) = update.expires_at {
            self.expires_at = expires_at;
        }
        if let Some(action_url) = &update.action_url {
            self.action_url = Some(action_url.clone());
        }
        if let Some(action_text) = &update.action_text {
            self.action_text = Some(action_text.clone());
        }
    }
}

/// Data required to create a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Type.
    pub kind: NotificationType,
    /// Severity.
    pub priority: NotificationPriority,
    /// Whether the notification is shown right away.
    pub is_active: bool,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Optional call-to-action link.
    pub action_url: Option<String>,
    /// Optional call-to-action label.
    pub action_text: Option<String>,
}

/// Partial update of a notification. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNotification {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    pub message: Option<String>,
    /// New type.
    pub kind: Option<NotificationType>,
    /// New severity.
    pub priority: Option<NotificationPriority>,
    /// Activate or deactivate.
    pub is_active: Option<bool>,
    /// `Some(None)` clears the expiry.
    pub expires_at: Option<Option<DateTime<Utc>>>,
    /// New call-to-action link.
    pub action_url: Option<String>,
    /// New call-to-action label.
    pub action_text: Option<String>,
}

impl UpdateNotification {
    /// Update that only toggles the active flag.
    pub fn set_active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }
}
