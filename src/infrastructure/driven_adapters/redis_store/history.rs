//! Redis Browsing History Store
//!
//! A list per user, newest SKU id at the head.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::domain::gateways::HistoryStore;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

use super::history_key;

pub struct RedisHistoryStore {
    conn: ConnectionManager,
}

impl RedisHistoryStore {
    #[must_use]
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl HistoryStore for RedisHistoryStore {
    async fn push(&self, user_id: UserId, sku_id: i64, limit: usize) -> Result<(), RepositoryError> {
        let key = history_key(user_id);
        let stop = isize::try_from(limit).unwrap_or(isize::MAX) - 1;

        let mut conn = self.conn.clone();
        let () = redis::pipe()
            .lrem(&key, 0, sku_id)
            .ignore()
            .lpush(&key, sku_id)
            .ignore()
            .ltrim(&key, 0, stop)
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<i64>, RepositoryError> {
        let mut conn = self.conn.clone();
        let ids: Vec<i64> = conn.lrange(history_key(user_id), 0, -1).await?;
        Ok(ids)
    }
}
