//! PostgreSQL connection pool management

use std::time::Duration;

use quill_common::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

/// Migrations from this crate's `migrations/` directory, embedded at build time
static MIGRATOR: Migrator = sqlx::migrate!();

/// Connection lifetime settings not exposed through the environment
#[derive(Debug, Clone, Copy)]
struct PoolTimeouts {
    /// Maximum time to wait for a connection
    acquire: Duration,
    /// Maximum idle time before a connection is closed
    idle: Duration,
    /// Maximum lifetime of a connection
    max_lifetime: Duration,
}

impl Default for PoolTimeouts {
    fn default() -> Self {
        Self {
            acquire: Duration::from_secs(10),
            idle: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Create a new PostgreSQL connection pool
///
/// Fails with `sqlx::Error::Configuration` if no URL is configured.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| sqlx::Error::Configuration("DATABASE_URL is not set".into()))?;
    let timeouts = PoolTimeouts::default();

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(timeouts.acquire)
        .idle_timeout(timeouts.idle)
        .max_lifetime(timeouts.max_lifetime)
        .connect(url)
        .await
}

/// Apply pending embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!(count = MIGRATOR.iter().count(), "Database migrations applied");
    Ok(())
}
