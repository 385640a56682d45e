//! Connection Management
//!
//! Utilities for creating the PostgreSQL pool and the Redis connection.

use redis::aio::ConnectionManager;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::config::{DatabaseConfig, RedisConfig};

/// Create a PostgreSQL connection pool from configuration
///
/// # Errors
///
/// Returns `sqlx::Error` if the database is unreachable.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}

/// Open a reconnecting Redis connection shared by all stores
///
/// # Errors
///
/// Returns `redis::RedisError` for an invalid URL or an unreachable server.
pub async fn create_redis(config: &RedisConfig) -> Result<ConnectionManager, redis::RedisError> {
    let client = redis::Client::open(config.url.as_str())?;
    ConnectionManager::new(client).await
}
