//! In-memory store backend.
//!
//! Mirrors the PostgreSQL schema's constraints: unique user emails, unique
//! guest session ids, one mark row per `(user, notification)`, mark rows
//! only for existing notifications, and cascading deletes. Selected with
//! `database.provider = "memory"`; all data is lost on restart.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use devboard_core::error::AppError;
use devboard_core::result::AppResult;
use devboard_entity::guest::Guest;
use devboard_entity::notification::{
    CreateNotification, MarkField, Notification, UpdateNotification, UserNotification,
    VisibleNotification,
};
use devboard_entity::user::{CreateUser, UpdateUser, User};

use crate::store::{GuestStore, NotificationStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    guests: BTreeMap<i64, Guest>,
    notifications: BTreeMap<i64, Notification>,
    marks: HashMap<(i64, i64), UserNotification>,
    next_user_id: i64,
    next_guest_id: i64,
    next_notification_id: i64,
    next_mark_id: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl Tables {
    fn feed(&self, user_id: i64) -> Vec<VisibleNotification> {
        let now = Utc::now();
        self.notifications
            .values()
            .filter(|n| n.is_live_at(now))
            .map(|n| VisibleNotification::from_parts(n, self.marks.get(&(user_id, n.id))))
            .filter(|entry| !entry.is_dismissed)
            .collect()
    }

    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// Process-local implementation of every store trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, input: &CreateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&input.email, None) {
            return Err(AppError::conflict("Email is already in use"));
        }
        let now = Utc::now();
        let user = User {
            id: next(&mut tables.next_user_id),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            birth_date: input.birth_date,
            role: input.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, input: &UpdateUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.email_taken(&input.email, Some(input.id)) {
            return Err(AppError::conflict("Email is already in use"));
        }
        let user = tables
            .users
            .get_mut(&input.id)
            .ok_or_else(|| AppError::not_found("User not found"))?;
        user.name = input.name.clone();
        user.email = input.email.clone();
        user.birth_date = input.birth_date;
        user.role = input.role;
        if let Some(hash) = &input.password_hash {
            user.password_hash = hash.clone();
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl GuestStore for MemoryStore {
    async fn find_by_session_id(&self, session_id: &str) -> AppResult<Option<Guest>> {
        let tables = self.tables.read().await;
        Ok(tables
            .guests
            .values()
            .find(|g| g.session_id == session_id)
            .cloned())
    }

    async fn create(&self, name: &str, session_id: &str) -> AppResult<Guest> {
        let mut tables = self.tables.write().await;
        if tables.guests.values().any(|g| g.session_id == session_id) {
            return Err(AppError::database("Duplicate guest session id"));
        }
        let guest = Guest {
            id: next(&mut tables.next_guest_id),
            name: name.to_string(),
            session_id: session_id.to_string(),
            created_at: Utc::now(),
        };
        tables.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn list_feed(&self, user_id: i64) -> AppResult<Vec<VisibleNotification>> {
        Ok(self.tables.read().await.feed(user_id))
    }

    async fn count_unread(&self, user_id: i64) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.feed(user_id).iter().filter(|e| !e.is_read).count() as i64)
    }

    async fn set_mark(
        &self,
        user_id: i64,
        notification_id: i64,
        field: MarkField,
    ) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user_id) {
            return Err(AppError::database(format!(
                "Mark references missing user {user_id}"
            )));
        }
        if !tables.notifications.contains_key(&notification_id) {
            return Err(AppError::database(format!(
                "Mark references missing notification {notification_id}"
            )));
        }
        if let Some(mark) = tables.marks.get_mut(&(user_id, notification_id)) {
            mark.set(field);
            return Ok(());
        }
        let mut mark = UserNotification {
            id: next(&mut tables.next_mark_id),
            user_id,
            notification_id,
            is_read: false,
            is_dismissed: false,
            read_at: Utc::now(),
        };
        mark.set(field);
        tables.marks.insert((user_id, notification_id), mark);
        Ok(())
    }

    async fn find_mark(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> AppResult<Option<UserNotification>> {
        let tables = self.tables.read().await;
        Ok(tables.marks.get(&(user_id, notification_id)).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Notification>> {
        let tables = self.tables.read().await;
        let mut all: Vec<Notification> = tables.notifications.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Notification>> {
        Ok(self.tables.read().await.notifications.get(&id).cloned())
    }

    async fn create(&self, input: &CreateNotification) -> AppResult<Notification> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let notification = Notification {
            id: next(&mut tables.next_notification_id),
            title: input.title.clone(),
            message: input.message.clone(),
            kind: input.kind,
            priority: input.priority,
            is_active: input.is_active,
            expires_at: input.expires_at,
            action_url: input.action_url.clone(),
            action_text: input.action_text.clone(),
            created_at: now,
            updated_at: now,
        };
        tables
            .notifications
            .insert(notification.id, notification.clone());
        Ok(notification)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateNotification,
    ) -> AppResult<Option<Notification>> {
        let mut tables = self.tables.write().await;
        Ok(tables.notifications.get_mut(&id).map(|n| {
            n.apply(input);
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables.notifications.remove(&id).is_some();
        if removed {
            tables.marks.retain(|(_, notification_id), _| *notification_id != id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use devboard_core::error::ErrorKind;
    use devboard_entity::notification::{NotificationPriority, NotificationType};
    use devboard_entity::user::DeveloperRole;

    fn notification(title: &str) -> CreateNotification {
        CreateNotification {
            title: title.to_string(),
            message: "body".to_string(),
            kind: NotificationType::Announcement,
            priority: NotificationPriority::Medium,
            is_active: true,
            expires_at: None,
            action_url: None,
            action_text: None,
        }
    }

    fn user(email: &str) -> CreateUser {
        CreateUser {
            name: "Ada".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            role: DeveloperRole::Backend,
        }
    }

    async fn seed_user(store: &MemoryStore, email: &str) -> i64 {
        UserStore::create(store, &user(email)).await.unwrap().id
    }

    #[tokio::test]
    async fn test_mark_read_twice_keeps_single_row() {
        let store = MemoryStore::new();
        let uid = seed_user(&store, "a@x.com").await;
        let n = NotificationStore::create(&store, &notification("a")).await.unwrap();

        store.set_mark(uid, n.id, MarkField::Read).await.unwrap();
        let first = store.find_mark(uid, n.id).await.unwrap().unwrap();
        store.set_mark(uid, n.id, MarkField::Read).await.unwrap();
        let second = store.find_mark(uid, n.id).await.unwrap().unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.is_read);
        assert!(!second.is_dismissed);
        assert_eq!(store.tables.read().await.marks.len(), 1);
    }

    #[tokio::test]
    async fn test_marks_leave_the_other_flag_alone() {
        let store = MemoryStore::new();
        let first = seed_user(&store, "a@x.com").await;
        let second = seed_user(&store, "b@x.com").await;
        let n = NotificationStore::create(&store, &notification("a")).await.unwrap();

        store.set_mark(first, n.id, MarkField::Dismissed).await.unwrap();
        store.set_mark(first, n.id, MarkField::Read).await.unwrap();
        let mark = store.find_mark(first, n.id).await.unwrap().unwrap();
        assert!(mark.is_read);
        assert!(mark.is_dismissed);

        store.set_mark(second, n.id, MarkField::Read).await.unwrap();
        let other = store.find_mark(second, n.id).await.unwrap().unwrap();
        assert!(other.is_read);
        assert!(!other.is_dismissed);
    }

    #[tokio::test]
    async fn test_feed_filters_inactive_expired_and_dismissed() {
        let store = MemoryStore::new();
        let viewer = seed_user(&store, "a@x.com").await;
        let other = seed_user(&store, "b@x.com").await;
        let live = NotificationStore::create(&store, &notification("live")).await.unwrap();
        let inactive = NotificationStore::create(&store, &notification("inactive")).await.unwrap();
        NotificationStore::update(&store, inactive.id, &UpdateNotification::set_active(false))
            .await
            .unwrap();
        let mut expired = notification("expired");
        expired.expires_at = Some(Utc::now() - Duration::minutes(5));
        NotificationStore::create(&store, &expired).await.unwrap();
        let dismissed = NotificationStore::create(&store, &notification("dismissed")).await.unwrap();
        store.set_mark(viewer, dismissed.id, MarkField::Dismissed).await.unwrap();

        let feed = store.list_feed(viewer).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, live.id);

        // Another user still sees the notification the viewer dismissed.
        assert_eq!(store.list_feed(other).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_count_unread_matches_feed() {
        let store = MemoryStore::new();
        let uid = seed_user(&store, "a@x.com").await;
        let a = NotificationStore::create(&store, &notification("a")).await.unwrap();
        NotificationStore::create(&store, &notification("b")).await.unwrap();
        NotificationStore::create(&store, &notification("c")).await.unwrap();
        store.set_mark(uid, a.id, MarkField::Read).await.unwrap();

        let feed = store.list_feed(uid).await.unwrap();
        let unread = feed.iter().filter(|e| !e.is_read).count() as i64;
        assert_eq!(store.count_unread(uid).await.unwrap(), unread);
        assert_eq!(unread, 2);
    }

    #[tokio::test]
    async fn test_mark_for_missing_notification_fails() {
        let store = MemoryStore::new();
        let uid = seed_user(&store, "a@x.com").await;
        let err = store.set_mark(uid, 999, MarkField::Read).await.unwrap_err();
        assert!(err.is(ErrorKind::Database));
    }

    #[tokio::test]
    async fn test_mark_for_missing_user_fails() {
        let store = MemoryStore::new();
        let n = NotificationStore::create(&store, &notification("a")).await.unwrap();
        let err = store.set_mark(42, n.id, MarkField::Read).await.unwrap_err();
        assert!(err.is(ErrorKind::Database));
        assert!(store.find_mark(42, n.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_marks() {
        let store = MemoryStore::new();
        let uid = seed_user(&store, "a@x.com").await;
        let n = NotificationStore::create(&store, &notification("a")).await.unwrap();
        store.set_mark(uid, n.id, MarkField::Read).await.unwrap();

        assert!(store.delete(n.id).await.unwrap());
        assert!(store.find_mark(uid, n.id).await.unwrap().is_none());
        assert!(!store.delete(n.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryStore::new();
        UserStore::create(&store, &user("a@x.com")).await.unwrap();
        let err = UserStore::create(&store, &user("a@x.com")).await.unwrap_err();
        assert!(err.is(ErrorKind::Conflict));
    }
}
