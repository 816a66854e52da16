//! Apply database migrations.

use tracing::info;

use devboard_core::config::{AppConfig, DatabaseProvider};
use devboard_core::error::AppError;
use devboard_database::DatabasePool;
use devboard_database::migration::run_migrations;

/// Execute the migrate command
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    if config.database.provider == DatabaseProvider::Memory {
        info!("Memory provider selected, nothing to migrate");
        return Ok(());
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let result = run_migrations(pool.pool()).await;
    pool.close().await;
    result?;

    info!("All migrations applied");
    Ok(())
}
