//! Admin access policy.

use std::collections::HashSet;

use tracing::debug;

use devboard_core::config::AuthConfig;
use devboard_core::error::AppError;

use crate::jwt::PrincipalKind;

/// Grants the notification admin area to an allow-list of emails.
///
/// Matching is exact: no case folding, no trimming.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    admin_emails: HashSet<String>,
}

impl AdminPolicy {
    /// Build the policy from `auth.admin_emails`.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_emails(config.admin_emails.iter().cloned())
    }

    /// Build the policy from an explicit list.
    pub fn from_emails(emails: impl IntoIterator<Item = String>) -> Self {
        Self {
            admin_emails: emails.into_iter().collect(),
        }
    }

    /// Whether `email` is on the allow-list.
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails.contains(email)
    }

    /// Check an authenticated principal and return the admin's email.
    pub fn authorize(&self, kind: PrincipalKind, email: Option<&str>) -> Result<String, AppError> {
        if kind != PrincipalKind::User {
            return Err(AppError::forbidden(
                "Only registered users may access the admin area",
            ));
        }
        let email = email.ok_or_else(|| AppError::forbidden("User email not found"))?;
        if !self.is_admin_email(email) {
            debug!(email, "Admin access denied");
            return Err(AppError::forbidden("Admin access required"));
        }
        Ok(email.to_string())
    }
}
