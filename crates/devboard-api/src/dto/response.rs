//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use devboard_core::error::AppError;
use devboard_entity::guest::Guest;
use devboard_entity::notification::Notification;
use devboard_entity::user::{DeveloperRole, User};
use devboard_service::{GuestSession, UserSession};

/// Public user profile. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Job category.
    pub role: DeveloperRole,
    /// Date of birth, `YYYY-MM-DD`.
    pub birth_date: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            birth_date: user.birth_date.format("%Y-%m-%d").to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAuthResponse {
    /// Bearer token.
    pub access_token: String,
    /// The signed-in user.
    pub user: UserResponse,
    /// Always `"user"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<UserSession> for UserAuthResponse {
    fn from(session: UserSession) -> Self {
        Self {
            access_token: session.access_token,
            user: session.user.into(),
            kind: "user".to_string(),
        }
    }
}

/// Public view of a guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    /// Guest ID.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Session id bound to the guest token.
    pub session_id: String,
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            session_id: guest.session_id,
        }
    }
}

/// Guest session response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestAuthResponse {
    /// Bearer token.
    pub access_token: String,
    /// The guest.
    pub guest: GuestResponse,
    /// Always `"guest"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<GuestSession> for GuestAuthResponse {
    fn from(session: GuestSession) -> Self {
        Self {
            access_token: session.access_token,
            guest: session.guest.into(),
            kind: "guest".to_string(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count.
    pub count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// `GET /notifications/admin/check` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheckResponse {
    /// Always true; non-admins are rejected before reaching the handler.
    pub is_admin: bool,
    /// The admin's email.
    pub email: String,
    /// Greeting.
    pub message: String,
}

/// `DELETE /notifications/admin/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Confirmation.
    pub message: String,
    /// The admin who deleted it.
    pub deleted_by: String,
    /// When it was deleted.
    pub deleted_at: DateTime<Utc>,
}

/// Serialize a notification and merge `extra` into the same object.
///
/// Keys in `extra` win, so a `message` there replaces the notification's.
pub fn annotated(notification: &Notification, extra: Value) -> Result<Value, AppError> {
    let mut body = serde_json::to_value(notification)?;
    if let (Value::Object(target), Value::Object(fields)) = (&mut body, extra) {
        target.extend(fields);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use devboard_entity::notification::{NotificationPriority, NotificationType};
    use serde_json::json;

    #[test]
    fn test_user_response_hides_hash_and_formats_birth_date() {
        let user = User {
            id: 7,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1994, 2, 3).unwrap(),
            role: DeveloperRole::UiUx,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let body = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(body["birthDate"], "1994-02-03");
        assert_eq!(body["role"], "ui-ux");
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[test]
    fn test_annotated_merges_fields() {
        let now = Utc::now();
        let notification = Notification {
            id: 1,
            title: "Maintenance".to_string(),
            message: "Tonight".to_string(),
            kind: NotificationType::Maintenance,
            priority: NotificationPriority::Urgent,
            is_active: true,
            expires_at: None,
            action_url: None,
            action_text: None,
            created_at: now,
            updated_at: now,
        };
        let body = annotated(&notification, json!({ "createdBy": "admin@x.com" })).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["type"], "maintenance");
        assert_eq!(body["isActive"], true);
        assert_eq!(body["createdBy"], "admin@x.com");
    }
}
