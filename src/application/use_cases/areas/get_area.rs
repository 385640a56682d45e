//! Get Area Use Case

use std::sync::Arc;

use crate::domain::gateways::AreaRepository;
use crate::domain::models::area::{Area, AreaWithSubs};
use crate::shared::errors::UseCaseError;

/// An area with its direct children
pub struct GetAreaUseCase {
    repository: Arc<dyn AreaRepository>,
}

impl GetAreaUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn AreaRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` for an unknown id.
    pub async fn execute(&self, id: i64) -> Result<AreaWithSubs, UseCaseError> {
        let area = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Area", id))?;
        let subs = self.repository.list_children(id).await?;

        Ok(AreaWithSubs {
            area: area.to_area_ref(),
            subs: subs.iter().map(Area::to_area_ref).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven_adapters::in_memory::InMemoryDatabase;

    #[tokio::test]
    async fn should_return_area_with_children() {
        let db = Arc::new(InMemoryDatabase::new());
        db.seed_area(440_000, "Guangdong", None);
        db.seed_area(440_300, "Shenzhen", Some(440_000));
        db.seed_area(440_100, "Guangzhou", Some(440_000));
        db.seed_area(440_103, "Liwan", Some(440_100));

        let use_case = GetAreaUseCase::new(db);
        let result = use_case.execute(440_000).await.unwrap();

        assert_eq!(result.area.name, "Guangdong");
        let ids: Vec<i64> = result.subs.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![440_100, 440_300]);
    }

    #[tokio::test]
    async fn should_return_not_found() {
        let use_case = GetAreaUseCase::new(Arc::new(InMemoryDatabase::new()));
        assert!(matches!(
            use_case.execute(1).await,
            Err(UseCaseError::NotFound { .. })
        ));
    }
}
