//! Admin management of notifications.
//!
//! Callers must already have passed the admin policy; this service does not
//! check who is asking.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use devboard_core::error::{AppError, ErrorKind};
use devboard_database::store::NotificationStore;
use devboard_entity::notification::{CreateNotification, Notification, UpdateNotification};

use super::stats::NotificationStats;

fn not_found() -> AppError {
    AppError::not_found("Notification not found")
}

/// Wrap a storage failure in a generic client-facing message.
fn storage_failure(message: &'static str, id: Option<i64>, e: AppError) -> AppError {
    error!(notification_id = ?id, error = %e, "{message}");
    AppError::with_source(ErrorKind::Internal, message, e)
}

/// Creates, edits, toggles and deletes notifications.
#[derive(Debug, Clone)]
pub struct AdminNotificationService {
    store: Arc<dyn NotificationStore>,
}

impl AdminNotificationService {
    /// Creates a new admin notification service.
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Insert a notification.
    pub async fn create(&self, input: CreateNotification) -> Result<Notification, AppError> {
        let notification = self
            .store
            .create(&input)
            .await
            .map_err(|e| storage_failure("Could not create notification", None, e))?;

        info!(
            notification_id = notification.id,
            title = %notification.title,
            "Notification created"
        );
        Ok(notification)
    }

    /// Every notification, newest first.
    pub async fn find_all(&self) -> Result<Vec<Notification>, AppError> {
        let all = self
            .store
            .find_all()
            .await
            .map_err(|e| storage_failure("Could not retrieve notifications", None, e))?;

        info!(count = all.len(), "Listed notifications for admin");
        Ok(all)
    }

    /// One notification, or `NotFound`.
    pub async fn find_one(&self, id: i64) -> Result<Notification, AppError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| storage_failure("Could not retrieve notification", Some(id), e))?
            .ok_or_else(not_found)
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        id: i64,
        input: UpdateNotification,
    ) -> Result<Notification, AppError> {
        let notification = self
            .store
            .update(id, &input)
            .await
            .map_err(|e| storage_failure("Could not update notification", Some(id), e))?
            .ok_or_else(not_found)?;

        info!(notification_id = id, "Notification updated");
        Ok(notification)
    }

    /// Hide a notification from every feed without deleting it.
    pub async fn deactivate(&self, id: i64) -> Result<Notification, AppError> {
        let notification = self.update(id, UpdateNotification::set_active(false)).await?;
        info!(notification_id = id, "Notification deactivated");
        Ok(notification)
    }

    /// Show a deactivated notification again.
    pub async fn activate(&self, id: i64) -> Result<Notification, AppError> {
        let notification = self.update(id, UpdateNotification::set_active(true)).await?;
        info!(notification_id = id, "Notification activated");
        Ok(notification)
    }

    /// Delete a notification and every mark row pointing at it.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        let removed = self
            .store
            .delete(id)
            .await
            .map_err(|e| storage_failure("Could not remove notification", Some(id), e))?;
        if !removed {
            return Err(not_found());
        }

        info!(notification_id = id, "Notification removed");
        Ok(())
    }

    /// Dashboard counters over all notifications.
    pub async fn stats(&self) -> Result<NotificationStats, AppError> {
        let all = self.find_all().await?;
        Ok(NotificationStats::compute(&all, Utc::now()))
    }
}
