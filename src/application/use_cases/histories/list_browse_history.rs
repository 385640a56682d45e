//! List Browse History Use Case

use std::sync::Arc;

use crate::domain::gateways::{HistoryStore, SkuRepository};
use crate::domain::models::sku::Sku;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct ListBrowseHistoryUseCase {
    sku_repository: Arc<dyn SkuRepository>,
    history_store: Arc<dyn HistoryStore>,
}

impl ListBrowseHistoryUseCase {
    #[must_use]
    pub fn new(sku_repository: Arc<dyn SkuRepository>, history_store: Arc<dyn HistoryStore>) -> Self {
        Self {
            sku_repository,
            history_store,
        }
    }

    /// SKUs in history order, newest first. Ids whose SKU is gone are skipped.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` on storage failures.
    pub async fn execute(&self, user_id: UserId) -> Result<Vec<Sku>, UseCaseError> {
        let ids = self.history_store.list(user_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut skus = self.sku_repository.find_by_ids(&ids).await?;
        let ordered = ids
            .iter()
            .filter_map(|id| {
                let position = skus.iter().position(|s| s.id == *id)?;
                Some(skus.swap_remove(position))
            })
            .collect();
        Ok(ordered)
    }
}
