//! Notification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use devboard_core::error::{AppError, ErrorKind};
use devboard_core::result::AppResult;
use devboard_entity::notification::{
    CreateNotification, MarkField, Notification, UpdateNotification, UserNotification,
    VisibleNotification,
};

use crate::store::NotificationStore;

/// Shared `FROM`/`WHERE` of the feed queries. `$1` is the user id.
const FEED_SOURCE: &str = "FROM notifications n \
     LEFT JOIN user_notifications un \
       ON un.notification_id = n.id AND un.user_id = $1 \
     WHERE n.is_active = TRUE \
       AND (n.expires_at IS NULL OR n.expires_at > NOW()) \
       AND COALESCE(un.is_dismissed, FALSE) = FALSE";

/// PostgreSQL-backed notification store.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationStore for NotificationRepository {
    async fn list_feed(&self, user_id: i64) -> AppResult<Vec<VisibleNotification>> {
        let sql = format!(
            "SELECT n.id, n.title, n.message, n.kind, n.priority, n.action_url, \
             n.action_text, n.created_at, \
             COALESCE(un.is_read, FALSE) AS is_read, \
             COALESCE(un.is_dismissed, FALSE) AS is_dismissed \
             {FEED_SOURCE}"
        );
        sqlx::query_as::<_, VisibleNotification>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list feed", e))
    }

    async fn count_unread(&self, user_id: i64) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) {FEED_SOURCE} AND COALESCE(un.is_read, FALSE) = FALSE");
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    async fn set_mark(
        &self,
        user_id: i64,
        notification_id: i64,
        field: MarkField,
    ) -> AppResult<()> {
        let column = field.column();
        let sql = format!(
            "INSERT INTO user_notifications (user_id, notification_id, {column}) \
             VALUES ($1, $2, TRUE) \
             ON CONFLICT (user_id, notification_id) DO UPDATE SET {column} = TRUE"
        );
        sqlx::query(&sql)
            .bind(user_id)
            .bind(notification_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert mark", e))?;
        Ok(())
    }

    async fn find_mark(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> AppResult<Option<UserNotification>> {
        sqlx::query_as::<_, UserNotification>(
            "SELECT * FROM user_notifications WHERE user_id = $1 AND notification_id = $2",
        )
        .bind(user_id)
        .bind(notification_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find mark", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
            })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    async fn create(&self, input: &CreateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications \
             (title, message, kind, priority, is_active, expires_at, action_url, action_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&input.title)
        .bind(&input.message)
        .bind(input.kind)
        .bind(input.priority)
        .bind(input.is_active)
        .bind(input.expires_at)
        .bind(input.action_url.as_deref())
        .bind(input.action_text.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateNotification,
    ) -> AppResult<Option<Notification>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let existing = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load notification", e))?;

        let Some(mut notification) = existing else {
            return Ok(None);
        };
        notification.apply(input);

        let updated = sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET title = $2, message = $3, kind = $4, priority = $5, \
             is_active = $6, expires_at = $7, action_url = $8, action_text = $9, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind)
        .bind(notification.priority)
        .bind(notification.is_active)
        .bind(notification.expires_at)
        .bind(notification.action_url.as_deref())
        .bind(notification.action_text.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update notification", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
