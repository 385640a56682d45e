//! Generate Static Index Page Use Case
//!
//! Collects category navigation and advertising slots and hands the
//! assembled page to the publisher.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::gateways::{ContentRepository, PagePublisher};
use crate::domain::models::content::{build_category_groups, group_contents, IndexPage};
use crate::shared::errors::UseCaseError;

pub struct GenerateIndexPageUseCase {
    repository: Arc<dyn ContentRepository>,
    publisher: Arc<dyn PagePublisher>,
}

impl GenerateIndexPageUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ContentRepository>, publisher: Arc<dyn PagePublisher>) -> Self {
        Self { repository, publisher }
    }

    /// Returns the path of the generated file
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` or `UseCaseError::Service` on failure.
    pub async fn execute(&self) -> Result<PathBuf, UseCaseError> {
        tracing::info!("Generating static index page");

        let channels = self.repository.list_channels().await?;
        let categories = self.repository.list_goods_categories().await?;
        let slots = self.repository.list_content_categories().await?;
        let contents = self.repository.list_active_contents().await?;

        let page = IndexPage {
            categories: build_category_groups(&channels, &categories),
            contents: group_contents(&slots, contents),
        };

        let path = self.publisher.publish_index(&page).await?;
        tracing::info!(path = %path.display(), groups = page.categories.len(), "Index page generated");
        Ok(path)
    }
}
