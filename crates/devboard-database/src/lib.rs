//! # devboard-database
//!
//! Storage for Devboard: the store traits the services depend on, the
//! PostgreSQL repositories implementing them, an in-memory backend, and the
//! [`Database`] handle that picks one of the two from configuration.

pub mod connection;
pub mod database;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use database::Database;
pub use memory::MemoryStore;
pub use store::{GuestStore, NotificationStore, UserStore};
