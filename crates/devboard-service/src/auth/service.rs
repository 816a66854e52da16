//! Credential operations and session-token resolution.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use devboard_auth::jwt::{JwtDecoder, JwtEncoder, PrincipalKind};
use devboard_auth::password::{PasswordHasher, PasswordValidator};
use devboard_core::error::AppError;
use devboard_database::store::{GuestStore, UserStore};
use devboard_entity::guest::Guest;
use devboard_entity::user::{CreateUser, DeveloperRole, User};

use crate::context::{Principal, RequestContext};

/// Data for a new registration.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Job category.
    pub role: DeveloperRole,
}

/// A signed-in registered user.
#[derive(Debug, Clone)]
pub struct UserSession {
    /// Bearer token.
    pub access_token: String,
    /// The user.
    pub user: User,
}

/// A freshly created guest session.
#[derive(Debug, Clone)]
pub struct GuestSession {
    /// Bearer token.
    pub access_token: String,
    /// The guest.
    pub guest: Guest,
}

/// Issues and resolves session tokens.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    guests: Arc<dyn GuestStore>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        guests: Arc<dyn GuestStore>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            guests,
            encoder,
            decoder,
            hasher,
            validator,
        }
    }

    /// Create an account and sign it in.
    pub async fn register(&self, input: RegisterUser) -> Result<UserSession, AppError> {
        self.validator.validate(&input.password)?;

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email is already in use"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .users
            .create(&CreateUser {
                name: input.name,
                email: input.email,
                password_hash,
                birth_date: input.birth_date,
                role: input.role,
            })
            .await?;

        info!(user_id = user.id, "User registered");

        let access_token = self.encoder.issue_user(user.id, &user.email)?;
        Ok(UserSession { access_token, user })
    }

    /// Check credentials and sign the user in.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession, AppError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) if self.hasher.verify_password(password, &user.password_hash)? => user,
            _ => {
                warn!("Failed login attempt");
                return Err(AppError::unauthorized("Invalid credentials"));
            }
        };

        info!(user_id = user.id, "User logged in");

        let access_token = self.encoder.issue_user(user.id, &user.email)?;
        Ok(UserSession { access_token, user })
    }

    /// Create a guest with a fresh session id.
    pub async fn guest(&self, name: &str) -> Result<GuestSession, AppError> {
        let session_id = Uuid::new_v4().to_string();
        let guest = self.guests.create(name, &session_id).await?;

        info!(guest_id = guest.id, "Guest session created");

        let access_token = self.encoder.issue_guest(guest.id, &guest.session_id)?;
        Ok(GuestSession {
            access_token,
            guest,
        })
    }

    /// Verify a bearer token and resolve its principal against storage.
    pub async fn authenticate(&self, token: &str) -> Result<RequestContext, AppError> {
        let claims = self.decoder.decode(token)?;

        let principal = match claims.kind {
            PrincipalKind::User => {
                let user = self
                    .users
                    .find_by_id(claims.sub)
                    .await?
                    .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;
                Principal::User {
                    user_id: user.id,
                    email: user.email,
                }
            }
            PrincipalKind::Guest => {
                let session_id = claims
                    .session_id
                    .as_deref()
                    .ok_or_else(|| AppError::unauthorized("Session id is required for guests"))?;
                let guest = self
                    .guests
                    .find_by_session_id(session_id)
                    .await?
                    .ok_or_else(|| AppError::unauthorized("Guest session not found"))?;
                Principal::Guest {
                    guest_id: guest.id,
                    session_id: guest.session_id,
                }
            }
        };

        Ok(RequestContext::new(principal))
    }
}
