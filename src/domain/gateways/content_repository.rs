//! Content Repository Gateway
//!
//! Read access to the data shown on the home page.

use async_trait::async_trait;

use crate::domain::models::content::{Content, ContentCategory, GoodsCategory, GoodsChannel};
use crate::shared::errors::RepositoryError;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Channels ordered by `(group_id, sequence)`
    async fn list_channels(&self) -> Result<Vec<GoodsChannel>, RepositoryError>;

    async fn list_goods_categories(&self) -> Result<Vec<GoodsCategory>, RepositoryError>;

    async fn list_content_categories(&self) -> Result<Vec<ContentCategory>, RepositoryError>;

    /// Contents with `status = true`, ordered by `sequence`
    async fn list_active_contents(&self) -> Result<Vec<Content>, RepositoryError>;
}
