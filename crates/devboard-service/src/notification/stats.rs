//! Aggregate counts over all notifications.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use devboard_entity::notification::Notification;

/// How far back "recent" reaches.
const RECENT_WINDOW_DAYS: i64 = 7;

/// Admin dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStats {
    /// All notifications.
    pub total: usize,
    /// Notifications with `is_active`.
    pub active: usize,
    /// Notifications without `is_active`.
    pub inactive: usize,
    /// Count per type label. Types with no notifications are omitted.
    pub by_type: BTreeMap<String, usize>,
    /// Count per priority label. Priorities with no notifications are omitted.
    pub by_priority: BTreeMap<String, usize>,
    /// Created within the last seven days.
    pub recent: usize,
}

impl NotificationStats {
    /// Tally `notifications` as of `now`.
    pub fn compute(notifications: &[Notification], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        let mut stats = Self {
            total: notifications.len(),
            ..Self::default()
        };

        for n in notifications {
            if n.is_active {
                stats.active += 1;
            } else {
                stats.inactive += 1;
            }
            if n.created_at > cutoff {
                stats.recent += 1;
            }
            *stats.by_type.entry(n.kind.to_string()).or_default() += 1;
            *stats.by_priority.entry(n.priority.to_string()).or_default() += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devboard_entity::notification::{NotificationPriority, NotificationType};

    fn notification(
        kind: NotificationType,
        priority: NotificationPriority,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Notification {
        Notification {
            id: 0,
            title: "t".into(),
            message: "m".into(),
            kind,
            priority,
            is_active,
            expires_at: None,
            action_url: None,
            action_text: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_compute() {
        let now = Utc::now();
        let all = vec![
            notification(NotificationType::Warning, NotificationPriority::High, true, now),
            notification(
                NotificationType::Warning,
                NotificationPriority::Low,
                false,
                now - Duration::days(8),
            ),
            notification(
                NotificationType::Feature,
                NotificationPriority::High,
                true,
                now - Duration::days(1),
            ),
        ];

        let stats = NotificationStats::compute(&all, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.recent, 2);
        assert_eq!(stats.by_type["warning"], 2);
        assert_eq!(stats.by_type["feature"], 1);
        assert_eq!(stats.by_priority["high"], 2);
        assert!(!stats.by_priority.contains_key("urgent"));

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byType"]["warning"], 2);
    }

    #[test]
    fn test_empty() {
        let stats = NotificationStats::compute(&[], Utc::now());
        assert_eq!(stats, NotificationStats::default());
    }
}
