//! Add Browse History Use Case

use std::sync::Arc;

use crate::domain::gateways::{HistoryStore, SkuRepository};
use crate::domain::models::sku::HISTORY_LIMIT;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Records that a user viewed a SKU
pub struct AddBrowseHistoryUseCase {
    sku_repository: Arc<dyn SkuRepository>,
    history_store: Arc<dyn HistoryStore>,
}

impl AddBrowseHistoryUseCase {
    #[must_use]
    pub fn new(sku_repository: Arc<dyn SkuRepository>, history_store: Arc<dyn HistoryStore>) -> Self {
        Self {
            sku_repository,
            history_store,
        }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the SKU does not exist or is not on sale.
    pub async fn execute(&self, user_id: UserId, sku_id: i64) -> Result<i64, UseCaseError> {
        let sku = self.sku_repository.find_by_id(sku_id).await?;
        if !sku.is_some_and(|s| s.is_launched) {
            return Err(UseCaseError::invalid(format!("sku_id: SKU {sku_id} does not exist")));
        }

        self.history_store.push(user_id, sku_id, HISTORY_LIMIT).await?;
        tracing::debug!(user_id = %user_id, sku_id, "Browse history recorded");
        Ok(sku_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven_adapters::in_memory::{InMemoryDatabase, InMemoryKeyValue};

    #[tokio::test]
    async fn should_keep_latest_five_without_duplicates() {
        let db = Arc::new(InMemoryDatabase::new());
        for id in 1..=7 {
            db.seed_sku(id, &format!("SKU {id}"), true);
        }
        let kv = Arc::new(InMemoryKeyValue::new());
        let use_case = AddBrowseHistoryUseCase::new(db, kv.clone());
        let user_id = UserId::new(1);

        for id in [1, 2, 3, 4, 5, 6, 3] {
            use_case.execute(user_id, id).await.unwrap();
        }

        assert_eq!(kv.history(user_id), vec![3, 6, 5, 4, 2]);
    }

    #[tokio::test]
    async fn should_reject_unknown_or_unlaunched_sku() {
        let db = Arc::new(InMemoryDatabase::new());
        db.seed_sku(1, "Off the shelf", false);
        let kv = Arc::new(InMemoryKeyValue::new());
        let use_case = AddBrowseHistoryUseCase::new(db, kv.clone());

        assert!(matches!(
            use_case.execute(UserId::new(1), 1).await,
            Err(UseCaseError::Validation(_))
        ));
        assert!(matches!(
            use_case.execute(UserId::new(1), 99).await,
            Err(UseCaseError::Validation(_))
        ));
        assert!(kv.history(UserId::new(1)).is_empty());
    }
}
