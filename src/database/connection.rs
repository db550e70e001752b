//! Database connection management

use sqlx::{Pool, Postgres};
use crate::config::DatabaseConfig;
use crate::utils::errors::LocaleError;

pub type DatabasePool = Pool<Postgres>;

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<DatabasePool, LocaleError> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;

    health_check(&pool).await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );
    Ok(pool)
}

/// Apply pending migrations from `./migrations`
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), LocaleError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Round-trip a trivial query
pub async fn health_check(pool: &DatabasePool) -> Result<(), LocaleError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await?;

    Ok(())
}
