//! List Provinces Use Case

use std::sync::Arc;

use crate::domain::gateways::AreaRepository;
use crate::domain::models::area::{Area, AreaRef};
use crate::shared::errors::UseCaseError;

pub struct ListProvincesUseCase {
    repository: Arc<dyn AreaRepository>,
}

impl ListProvincesUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn AreaRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` on storage failures.
    pub async fn execute(&self) -> Result<Vec<AreaRef>, UseCaseError> {
        let provinces = self.repository.list_provinces().await?;
        Ok(provinces.iter().map(Area::to_area_ref).collect())
    }
}
