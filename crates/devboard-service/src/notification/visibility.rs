//! Which notifications a user sees, and in what order.
//!
//! The store applies the filter (active, unexpired, not dismissed by this
//! user) and annotates each row with the user's read/dismiss flags. Ordering
//! happens here, from the priority rank table.

use std::sync::Arc;

use tracing::{error, warn};

use devboard_core::error::{AppError, ErrorKind};
use devboard_database::store::NotificationStore;
use devboard_entity::notification::VisibleNotification;

/// Sort a feed by priority rank descending, then newest first.
pub fn sort_feed(feed: &mut [VisibleNotification]) {
    feed.sort_by(VisibleNotification::feed_order);
}

/// Computes per-user feeds over a notification store.
#[derive(Debug, Clone)]
pub struct VisibilityEngine {
    store: Arc<dyn NotificationStore>,
}

impl VisibilityEngine {
    /// Creates a new engine.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// The user's feed in display order. Never creates mark rows.
    pub async fn list_visible(&self, user_id: i64) -> Result<Vec<VisibleNotification>, AppError> {
        let mut feed = self.store.list_feed(user_id).await.map_err(|e| {
            error!(user_id, error = %e, "Failed to load notification feed");
            AppError::with_source(ErrorKind::Internal, "Could not retrieve notifications", e)
        })?;
        sort_feed(&mut feed);
        Ok(feed)
    }

    /// Unread entries in the user's feed. Storage failures degrade to 0.
    pub async fn count_unread(&self, user_id: i64) -> i64 {
        match self.store.count_unread(user_id).await {
            Ok(count) => count,
            Err(e) => {
                warn!(user_id, error = %e, "Failed to count unread notifications");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use devboard_entity::notification::{NotificationPriority, NotificationType};

    fn entry(id: i64, priority: NotificationPriority, created_at: DateTime<Utc>) -> VisibleNotification {
        VisibleNotification {
            id,
            title: format!("n{id}"),
            message: "m".into(),
            kind: NotificationType::Update,
            priority,
            action_url: None,
            action_text: None,
            created_at,
            is_read: false,
            is_dismissed: false,
        }
    }

    #[test]
    fn test_sort_by_rank_not_label() {
        let now = Utc::now();
        let mut feed = vec![
            entry(1, NotificationPriority::Low, now),
            entry(2, NotificationPriority::High, now - Duration::seconds(1)),
            entry(3, NotificationPriority::Medium, now - Duration::seconds(2)),
        ];
        sort_feed(&mut feed);
        let ids: Vec<i64> = feed.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_newest_first_within_a_priority() {
        let now = Utc::now();
        let mut feed = vec![
            entry(1, NotificationPriority::Urgent, now - Duration::hours(2)),
            entry(2, NotificationPriority::Urgent, now),
            entry(3, NotificationPriority::Low, now + Duration::hours(1)),
        ];
        sort_feed(&mut feed);
        let ids: Vec<i64> = feed.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
