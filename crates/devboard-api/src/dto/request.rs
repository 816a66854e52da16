//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use devboard_core::error::AppError;
use devboard_entity::notification::{
    CreateNotification, NotificationPriority, NotificationType, UpdateNotification,
};
use devboard_entity::user::DeveloperRole;
use devboard_service::{RegisterUser, UpdateProfile};

use super::timestamp::{parse_date, parse_timestamp};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
    /// Login email.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Plaintext password. The minimum length is enforced by the service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Date of birth as an ISO 8601 date.
    pub birth_date: String,
    /// Job category.
    pub role: DeveloperRole,
}

impl RegisterRequest {
    /// Convert into the service input.
    pub fn into_input(self) -> Result<RegisterUser, AppError> {
        Ok(RegisterUser {
            birth_date: parse_date("birthDate", &self.birth_date)?,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        })
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Guest session request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuestRequest {
    /// Name shown for the guest.
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
}

/// Profile replacement request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required (max 100 characters)"))]
    pub name: String,
    /// Email.
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    /// Date of birth as an ISO 8601 date.
    pub birth_date: String,
    /// Job category.
    pub role: DeveloperRole,
    /// Current password, required to change it.
    pub current_password: Option<String>,
    /// New password.
    pub new_password: Option<String>,
}

impl UpdateProfileRequest {
    /// Convert into the service input.
    pub fn into_input(self) -> Result<UpdateProfile, AppError> {
        Ok(UpdateProfile {
            birth_date: parse_date("birthDate", &self.birth_date)?,
            name: self.name,
            email: self.email,
            role: self.role,
            current_password: self.current_password,
            new_password: self.new_password,
        })
    }
}

/// Body of `POST /notifications/admin` and the broadcast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Type.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Severity.
    pub priority: NotificationPriority,
    /// ISO 8601 date or datetime.
    pub expires_at: Option<String>,
    /// Call-to-action link.
    #[validate(url(message = "Action URL must be a valid URL"))]
    pub action_url: Option<String>,
    /// Call-to-action label.
    #[validate(length(max = 50, message = "Action text must be at most 50 characters"))]
    pub action_text: Option<String>,
}

impl CreateNotificationRequest {
    /// Convert into a new active notification. An empty `expiresAt` means
    /// no expiry.
    pub fn into_create(self) -> Result<CreateNotification, AppError> {
        let expires_at = match self.expires_at.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_timestamp("expiresAt", value)?),
        };
        Ok(CreateNotification {
            title: self.title,
            message: self.message,
            kind: self.kind,
            priority: self.priority,
            is_active: true,
            expires_at,
            action_url: self.action_url,
            action_text: self.action_text,
        })
    }
}

/// Body of `PATCH /notifications/admin/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationRequest {
    /// Title.
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: Option<String>,
    /// Body text.
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: Option<String>,
    /// Type.
    #[serde(rename = "type")]
    pub kind: Option<NotificationType>,
    /// Severity.
    pub priority: Option<NotificationPriority>,
    /// Active flag.
    pub is_active: Option<bool>,
    /// New expiry. An empty string clears it.
    pub expires_at: Option<String>,
    /// Call-to-action link.
    #[validate(url(message = "Action URL must be a valid URL"))]
    pub action_url: Option<String>,
    /// Call-to-action label.
    #[validate(length(max = 50, message = "Action text must be at most 50 characters"))]
    pub action_text: Option<String>,
}

impl UpdateNotificationRequest {
    /// Convert into a partial update.
    pub fn into_update(self) -> Result<UpdateNotification, AppError> {
        let expires_at = match self.expires_at.as_deref().map(str::trim) {
            None => None,
            Some("") => Some(None),
            Some(value) => Some(Some(parse_timestamp("expiresAt", value)?)),
        };
        Ok(UpdateNotification {
            title: self.title,
            message: self.message,
            kind: self.kind,
            priority: self.priority,
            is_active: self.is_active,
            expires_at,
            action_url: self.action_url,
            action_text: self.action_text,
        })
    }
}

/// Body of `POST /notifications/mark-read`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    /// Ids to mark as read, processed in order.
    pub notification_ids: Vec<i64>,
}
