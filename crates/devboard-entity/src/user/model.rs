//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::DeveloperRole;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique login email.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Job category.
    pub role: DeveloperRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Job category.
    pub role: DeveloperRole,
}

/// Full replacement of a user's profile fields.
///
/// `password_hash` is only written when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: i64,
    /// New display name.
    pub name: String,
    /// New email.
    pub email: String,
    /// New date of birth.
    pub birth_date: NaiveDate,
    /// New job category.
    pub role: DeveloperRole,
    /// New password hash, if the password is being changed.
    pub password_hash: Option<String>,
}
