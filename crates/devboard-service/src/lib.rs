//! # devboard-service
//!
//! Business logic service layer for Devboard. Each service works against
//! the store traits from `devboard-database`, so the same code runs on
//! PostgreSQL and on the in-memory backend.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod notification;
pub mod user;

pub use auth::{AuthService, GuestSession, RegisterUser, UserSession};
pub use context::{Principal, RequestContext};
pub use notification::{AdminNotificationService, NotificationService, NotificationStats};
pub use user::{UpdateProfile, UserService};
