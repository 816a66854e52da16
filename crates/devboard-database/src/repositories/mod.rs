//! PostgreSQL implementations of the store traits.

pub mod guest;
pub mod notification;
pub mod user;

pub use guest::GuestRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
