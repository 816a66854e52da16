//! Notification type enumeration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a notification is about.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "notification_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Product update.
    Update,
    /// General announcement.
    #[default]
    Announcement,
    /// Something needs the reader's attention.
    Warning,
    /// Planned downtime or maintenance window.
    Maintenance,
    /// New feature release.
    Feature,
}

impl NotificationType {
    /// All types in declaration order.
    pub const ALL: [NotificationType; 5] = [
        Self::Update,
        Self::Announcement,
        Self::Warning,
        Self::Maintenance,
        Self::Feature,
    ];

    /// Return the type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Announcement => "announcement",
            Self::Warning => "warning",
            Self::Maintenance => "maintenance",
            Self::Feature => "feature",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = devboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| {
                devboard_core::AppError::validation(format!(
                    "Invalid notification type: '{s}'"
                ))
            })
    }
}
