//! Notification feed, read state and admin management.

pub mod admin;
pub mod service;
pub mod stats;
pub mod visibility;

pub use admin::AdminNotificationService;
pub use service::NotificationService;
pub use stats::NotificationStats;
pub use visibility::VisibilityEngine;
