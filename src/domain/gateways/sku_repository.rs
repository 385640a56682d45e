//! SKU Repository Gateway

use async_trait::async_trait;

use crate::domain::models::sku::Sku;
use crate::shared::errors::RepositoryError;

/// Read-only SKU lookups
#[async_trait]
pub trait SkuRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Sku>, RepositoryError>;

    /// Fetch several SKUs; order of the result is unspecified and missing ids are skipped
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Sku>, RepositoryError>;
}
