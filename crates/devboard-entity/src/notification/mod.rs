//! Notification domain entities.

pub mod feed;
pub mod kind;
pub mod mark;
pub mod model;
pub mod priority;

pub use feed::VisibleNotification;
pub use kind::NotificationType;
pub use mark::{MarkField, UserNotification};
pub use model::{CreateNotification, Notification, UpdateNotification};
pub use priority::NotificationPriority;
