//! # devboard-auth
//!
//! Authentication building blocks for Devboard.
//!
//! ## Modules
//!
//! - `jwt`: HS256 session tokens for users and guests
//! - `password`: Argon2id hashing and the minimum-length rule
//! - `policy`: the admin email allow-list

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, PrincipalKind};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::AdminPolicy;
