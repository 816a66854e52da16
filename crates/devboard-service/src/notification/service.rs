//! Per-user notification operations: feed, unread count, read and dismiss.

use std::sync::Arc;

use tracing::{error, info};

use devboard_core::error::{AppError, ErrorKind};
use devboard_database::store::NotificationStore;
use devboard_entity::notification::{MarkField, VisibleNotification};

use super::visibility::VisibilityEngine;
use crate::context::RequestContext;

/// Serves the notification feed to authenticated callers.
///
/// Guests get an empty feed and a zero count, and may not mark anything.
#[derive(Debug, Clone)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    engine: VisibilityEngine,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self {
            engine: VisibilityEngine::new(store.clone()),
            store,
        }
    }

    /// The caller's feed.
    pub async fn list_for(&self, ctx: &RequestContext) -> Result<Vec<VisibleNotification>, AppError> {
        match ctx.principal.user_id() {
            Some(user_id) => self.engine.list_visible(user_id).await,
            None => Ok(Vec::new()),
        }
    }

    /// The caller's unread count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> i64 {
        match ctx.principal.user_id() {
            Some(user_id) => self.engine.count_unread(user_id).await,
            None => 0,
        }
    }

    /// Mark each id read, one upsert at a time.
    ///
    /// There is no surrounding transaction: on failure the loop stops and
    /// marks already written stay.
    pub async fn mark_as_read(
        &self,
        ctx: &RequestContext,
        notification_ids: &[i64],
    ) -> Result<(), AppError> {
        let user_id = ctx.require_user("Guests cannot mark notifications")?;

        for &notification_id in notification_ids {
            self.store
                .set_mark(user_id, notification_id, MarkField::Read)
                .await
                .map_err(|e| {
                    error!(user_id, notification_id, error = %e, "Failed to mark notification read");
                    AppError::with_source(
                        ErrorKind::Internal,
                        "Could not mark notifications as read",
                        e,
                    )
                })?;
        }

        info!(user_id, count = notification_ids.len(), "Notifications marked read");
        Ok(())
    }

    /// Hide one notification from the caller's feed.
    pub async fn dismiss(&self, ctx: &RequestContext, notification_id: i64) -> Result<(), AppError> {
        let user_id = ctx.require_user("Guests cannot dismiss notifications")?;

        self.store
            .set_mark(user_id, notification_id, MarkField::Dismissed)
            .await
            .map_err(|e| {
                error!(user_id, notification_id, error = %e, "Failed to dismiss notification");
                AppError::with_source(ErrorKind::Internal, "Could not dismiss notification", e)
            })?;

        info!(user_id, notification_id, "Notification dismissed");
        Ok(())
    }
}
