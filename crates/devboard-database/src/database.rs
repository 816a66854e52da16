//! Store handles selected from configuration.

use std::sync::Arc;

use tracing::info;

use devboard_core::config::{DatabaseConfig, DatabaseProvider};
use devboard_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{GuestRepository, NotificationRepository, UserRepository};
use crate::store::{GuestStore, NotificationStore, UserStore};

/// The three stores, backed by the configured provider.
#[derive(Debug, Clone)]
pub struct Database {
    /// Registered users.
    pub users: Arc<dyn UserStore>,
    /// Guests.
    pub guests: Arc<dyn GuestStore>,
    /// Notifications and mark rows.
    pub notifications: Arc<dyn NotificationStore>,
    pool: Option<DatabasePool>,
}

impl Database {
    /// Build the stores for `config.provider`, connecting and migrating
    /// PostgreSQL when selected.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL stores");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory stores");
                Ok(Self::in_memory())
            }
        }
    }

    /// Stores backed by an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pg.clone())),
            guests: Arc::new(GuestRepository::new(pg.clone())),
            notifications: Arc::new(NotificationRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Stores sharing one fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            users: Arc::new(store.clone()),
            guests: Arc::new(store.clone()),
            notifications: Arc::new(store),
            pool: None,
        }
    }

    /// The PostgreSQL pool, when that provider is in use.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Connectivity check. The memory provider is always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release pooled connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_provider_needs_no_url() {
        let config = DatabaseConfig {
            provider: DatabaseProvider::Memory,
            ..DatabaseConfig::default()
        };
        let db = Database::connect(&config).await.unwrap();
        assert!(db.pool().is_none());
        assert!(db.health_check().await.unwrap());
        assert!(db.notifications.find_all().await.unwrap().is_empty());
    }
}
