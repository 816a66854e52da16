//! JWT token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use devboard_core::config::AuthConfig;
use devboard_core::error::AppError;

use super::claims::{Claims, PrincipalKind};

/// Signs session tokens with the configured HMAC secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_hours: config.jwt_ttl_hours as i64,
        }
    }

    /// Issue a token for a registered user.
    pub fn issue_user(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        self.issue(user_id, Some(email.to_string()), None, PrincipalKind::User)
    }

    /// Issue a token for a guest session.
    pub fn issue_guest(&self, guest_id: i64, session_id: &str) -> Result<String, AppError> {
        self.issue(guest_id, None, Some(session_id.to_string()), PrincipalKind::Guest)
    }

    fn issue(
        &self,
        sub: i64,
        email: Option<String>,
        session_id: Option<String>,
        kind: PrincipalKind,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub,
            email,
            session_id,
            kind,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.ttl_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
