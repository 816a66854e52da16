//! Registration, login, guest access and token resolution.

pub mod service;

pub use service::{AuthService, GuestSession, RegisterUser, UserSession};
