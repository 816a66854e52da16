//! Guest entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An anonymous visitor identified by a server-generated session id.
///
/// Guests are created once and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Unique guest identifier.
    pub id: i64,
    /// Name the visitor introduced themselves with.
    pub name: String,
    /// Opaque session token, unique across guests.
    pub session_id: String,
    /// When the guest was created.
    pub created_at: DateTime<Utc>,
}
