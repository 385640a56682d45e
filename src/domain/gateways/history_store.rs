//! Browsing History Store Gateway

use async_trait::async_trait;

use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Per-user list of recently viewed SKU ids, newest first
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Move `sku_id` to the front, dropping older duplicates, keeping at most `limit` entries
    async fn push(&self, user_id: UserId, sku_id: i64, limit: usize) -> Result<(), RepositoryError>;

    async fn list(&self, user_id: UserId) -> Result<Vec<i64>, RepositoryError>;
}
