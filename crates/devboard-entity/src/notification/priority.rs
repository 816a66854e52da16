//! Notification priority enumeration and severity ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How urgent a notification is.
///
/// Ordering follows [`NotificationPriority::rank`], never the label text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "notification_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    /// Can be ignored.
    Low,
    /// Normal.
    #[default]
    Medium,
    /// Should be read soon.
    High,
    /// Must be read now.
    Urgent,
}

impl NotificationPriority {
    /// All priorities from least to most severe.
    pub const ALL: [NotificationPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Severity rank (higher = more severe).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl PartialOrd for NotificationPriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NotificationPriority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for NotificationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationPriority {
    type Err = devboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(devboard_core::AppError::validation(format!(
                "Invalid priority: '{s}'. Expected one of: low, medium, high, urgent"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_uses_rank_not_label() {
        // Lexically "urgent" > "medium" > "low" > "high"; by severity it is not.
        let mut priorities = vec![
            NotificationPriority::Low,
            NotificationPriority::Urgent,
            NotificationPriority::High,
            NotificationPriority::Medium,
        ];
        priorities.sort();
        assert_eq!(priorities, NotificationPriority::ALL.to_vec());
        assert!(NotificationPriority::High > NotificationPriority::Medium);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "URGENT".parse::<NotificationPriority>().unwrap(),
            NotificationPriority::Urgent
        );
        assert!("critical".parse::<NotificationPriority>().is_err());
    }
}
