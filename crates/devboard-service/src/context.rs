//! Request context carrying the authenticated principal.

use chrono::{DateTime, Utc};
use serde::Serialize;

use devboard_auth::PrincipalKind;
use devboard_core::error::AppError;

/// Who is making the request, resolved against storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Principal {
    /// A registered user. `email` is the stored email, not the token's.
    User {
        /// User id.
        user_id: i64,
        /// Current email.
        email: String,
    },
    /// A guest session.
    Guest {
        /// Guest id.
        guest_id: i64,
        /// Session id the guest token was issued for.
        session_id: String,
    },
}

impl Principal {
    /// The principal kind.
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::User { .. } => PrincipalKind::User,
            Self::Guest { .. } => PrincipalKind::Guest,
        }
    }

    /// The email of a registered user.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::User { email, .. } => Some(email),
            Self::Guest { .. } => None,
        }
    }

    /// The user id, or `None` for guests.
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::User { user_id, .. } => Some(*user_id),
            Self::Guest { .. } => None,
        }
    }
}

/// Context for the current authenticated request.
///
/// Built by the API layer's auth extractor and passed into service methods
/// so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// The authenticated principal.
    pub principal: Principal,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(principal: Principal) -> Self {
        Self {
            principal,
            request_time: Utc::now(),
        }
    }

    /// The user id, or `Forbidden` with `message` for guests.
    pub fn require_user(&self, message: &str) -> Result<i64, AppError> {
        self.principal
            .user_id()
            .ok_or_else(|| AppError::forbidden(message))
    }
}
