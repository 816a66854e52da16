//! Feed entries: notifications annotated with one user's mark state.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::kind::NotificationType;
use super::mark::UserNotification;
use super::model::Notification;
use super::priority::NotificationPriority;

/// A notification as seen by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VisibleNotification {
    /// Notification identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Type.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Severity.
    pub priority: NotificationPriority,
    /// Call-to-action link.
    pub action_url: Option<String>,
    /// Call-to-action label.
    pub action_text: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// The user's read flag, `false` without a mark row.
    pub is_read: bool,
    /// The user's dismiss flag, `false` without a mark row.
    pub is_dismissed: bool,
}

impl VisibleNotification {
    /// Join a notification with the user's optional mark row.
    pub fn from_parts(notification: &Notification, mark: Option<&UserNotification>) -> Self {
        Self {
            id: notification.id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind,
            priority: notification.priority,
            action_url: notification.action_url.clone(),
            action_text: notification.action_text.clone(),
            created_at: notification.created_at,
            is_read: mark.map(|m| m.is_read).unwrap_or(false),
            is_dismissed: mark.map(|m| m.is_dismissed).unwrap_or(false),
        }
    }

    /// Feed order: most severe first, newest first within a severity.
    pub fn feed_order(a: &Self, b: &Self) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
    }
}
