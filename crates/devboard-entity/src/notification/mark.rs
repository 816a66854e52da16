//! Per-user read/dismiss mark rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read/dismiss state of one notification for one user.
///
/// At most one row exists per `(user_id, notification_id)`. A missing row
/// means "unread, not dismissed".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserNotification {
    /// Row identifier.
    pub id: i64,
    /// The user this mark belongs to.
    pub user_id: i64,
    /// The marked notification.
    pub notification_id: i64,
    /// Whether the user has read the notification.
    pub is_read: bool,
    /// Whether the user has dismissed the notification.
    pub is_dismissed: bool,
    /// When the row was first created.
    pub read_at: DateTime<Utc>,
}

/// The flag a mark upsert sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkField {
    /// `is_read`
    Read,
    /// `is_dismissed`
    Dismissed,
}

impl MarkField {
    /// Column name on `user_notifications`.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Read => "is_read",
            Self::Dismissed => "is_dismissed",
        }
    }
}

impl UserNotification {
    /// Set the given flag to `true`, leaving the other flag untouched.
    pub fn set(&mut self, field: MarkField) {
        match field {
            MarkField::Read => self.is_read = true,
            MarkField::Dismissed => self.is_dismissed = true,
        }
    }
}
