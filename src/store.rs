//! Connection pool construction from explicit configuration.

use crate::config::{DatabaseConfig, ServerConfig};
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

fn pool_options(server: &ServerConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(server.max_connections)
        .acquire_timeout(server.acquire_timeout)
}

/// Open the process-wide pool. Connects eagerly so an unreachable host or bad credentials fail startup.
pub async fn connect(database: &DatabaseConfig, server: &ServerConfig) -> Result<PgPool, AppError> {
    tracing::info!(url = %database.redacted_url(), max_connections = server.max_connections, "connecting to database");
    let pool = pool_options(server).connect_with(database.connect_options()).await?;
    Ok(pool)
}

/// Build the pool without opening any connection; the first checkout connects.
pub fn connect_lazy(database: &DatabaseConfig, server: &ServerConfig) -> PgPool {
    pool_options(server).connect_lazy_with(database.connect_options())
}
