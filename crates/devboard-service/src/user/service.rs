//! User self-service operations: profile viewing and editing.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use devboard_auth::password::{PasswordHasher, PasswordValidator};
use devboard_core::error::AppError;
use devboard_database::store::UserStore;
use devboard_entity::user::{DeveloperRole, UpdateUser, User};

use crate::context::RequestContext;

const GUEST_PROFILE: &str = "Guests do not have a profile";

/// Full profile replacement, with an optional password change.
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    /// New display name.
    pub name: String,
    /// New email.
    pub email: String,
    /// New date of birth.
    pub birth_date: NaiveDate,
    /// New job category.
    pub role: DeveloperRole,
    /// Required together with `new_password` to change the password.
    pub current_password: Option<String>,
    /// The replacement password.
    pub new_password: Option<String>,
}

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Gets the current user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        let user_id = ctx.require_user(GUEST_PROFILE)?;
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Replace the current user's profile fields.
    ///
    /// The password only changes when both `current_password` and
    /// `new_password` are given. A password field shorter than the configured
    /// minimum is a `Validation` error.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        req: UpdateProfile,
    ) -> Result<User, AppError> {
        let user = self.get_profile(ctx).await?;

        // Either password field is held to the policy even when sent alone.
        for password in [&req.current_password, &req.new_password]
            .into_iter()
            .flatten()
        {
            self.validator.validate(password)?;
        }

        if req.email != user.email {
            if let Some(existing) = self.users.find_by_email(&req.email).await? {
                if existing.id != user.id {
                    return Err(AppError::conflict("Email is already in use by another user"));
                }
            }
        }

        let password_hash = match (&req.current_password, &req.new_password) {
            (Some(current), Some(new)) => {
                if !self.hasher.verify_password(current, &user.password_hash)? {
                    return Err(AppError::unauthorized("Current password is incorrect"));
                }
                self.validator.validate(new)?;
                Some(self.hasher.hash_password(new)?)
            }
            _ => None,
        };
        let password_changed = password_hash.is_some();

        let updated = self
            .users
            .update(&UpdateUser {
                id: user.id,
                name: req.name,
                email: req.email,
                birth_date: req.birth_date,
                role: req.role,
                password_hash,
            })
            .await?;

        info!(user_id = updated.id, password_changed, "Profile updated");

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devboard_core::config::AuthConfig;
    use devboard_core::error::ErrorKind;
    use devboard_database::MemoryStore;
    use devboard_entity::user::CreateUser;

    use crate::context::Principal;

    struct Fixture {
        service: UserService,
        store: MemoryStore,
        hasher: Arc<PasswordHasher>,
    }

    fn fixture() -> Fixture {
        let store = MemoryStore::new();
        let hasher = Arc::new(PasswordHasher::new());
        let service = UserService::new(
            Arc::new(store.clone()),
            hasher.clone(),
            Arc::new(PasswordValidator::new(&AuthConfig::default())),
        );
        Fixture {
            service,
            store,
            hasher,
        }
    }

    async fn seed(f: &Fixture, email: &str) -> RequestContext {
        let user = UserStore::create(
            &f.store,
            &CreateUser {
                name: "Ada".into(),
                email: email.into(),
                password_hash: f.hasher.hash_password("secret1").unwrap(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                role: DeveloperRole::Frontend,
            },
        )
        .await
        .unwrap();
        RequestContext::new(Principal::User {
            user_id: user.id,
            email: user.email,
        })
    }

    fn update(email: &str) -> UpdateProfile {
        UpdateProfile {
            name: "Ada L".into(),
            email: email.into(),
            birth_date: NaiveDate::from_ymd_opt(1991, 2, 3).unwrap(),
            role: DeveloperRole::Data,
            current_password: None,
            new_password: None,
        }
    }

    #[tokio::test]
    async fn test_update_profile_fields() {
        let f = fixture();
        let ctx = seed(&f, "a@x.com").await;
        let user = f.service.update_profile(&ctx, update("a@x.com")).await.unwrap();
        assert_eq!(user.name, "Ada L");
        assert_eq!(user.role, DeveloperRole::Data);
        assert!(f.hasher.verify_password("secret1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_email_owned_by_other_user_conflicts() {
        let f = fixture();
        seed(&f, "b@x.com").await;
        let ctx = seed(&f, "a@x.com").await;
        let err = f
            .service
            .update_profile(&ctx, update("b@x.com"))
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
        assert_eq!(err.message, "Email is already in use by another user");
    }

    #[tokio::test]
    async fn test_password_change_requires_current_password() {
        let f = fixture();
        let ctx = seed(&f, "a@x.com").await;

        let mut req = update("a@x.com");
        req.current_password = Some("wrong1".into());
        req.new_password = Some("newpass1".into());
        let err = f.service.update_profile(&ctx, req).await.unwrap_err();
        assert!(err.is(ErrorKind::Unauthorized));

        let mut req = update("a@x.com");
        req.current_password = Some("secret1".into());
        req.new_password = Some("newpass1".into());
        let user = f.service.update_profile(&ctx, req).await.unwrap();
        assert!(f.hasher.verify_password("newpass1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_short_password_field_is_rejected_even_alone() {
        let f = fixture();
        let ctx = seed(&f, "a@x.com").await;

        let mut req = update("a@x.com");
        req.new_password = Some("abc".into());
        let err = f.service.update_profile(&ctx, req).await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));

        let mut req = update("a@x.com");
        req.current_password = Some("abc".into());
        let err = f.service.update_profile(&ctx, req).await.unwrap_err();
        assert!(err.is(ErrorKind::Validation));

        let user = f.service.get_profile(&ctx).await.unwrap();
        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn test_guest_has_no_profile() {
        let f = fixture();
        let ctx = RequestContext::new(Principal::Guest {
            guest_id: 1,
            session_id: "s".into(),
        });
        let err = f.service.get_profile(&ctx).await.unwrap_err();
        assert!(err.is(ErrorKind::Forbidden));
    }
}
