//! Guest repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use devboard_core::error::{AppError, ErrorKind};
use devboard_core::result::AppResult;
use devboard_entity::guest::Guest;

use crate::store::GuestStore;

/// PostgreSQL-backed guest store.
#[derive(Debug, Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    /// Create a new guest repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestStore for GuestRepository {
    async fn find_by_session_id(&self, session_id: &str) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE session_id = $1")
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find guest by session", e)
            })
    }

    async fn create(&self, name: &str, session_id: &str) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (name, session_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(session_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create guest", e))
    }
}
