//! Area Repository Gateway

use async_trait::async_trait;

use crate::domain::models::area::Area;
use crate::shared::errors::RepositoryError;

/// Read-only access to the administrative area tree
#[async_trait]
pub trait AreaRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Area>, RepositoryError>;

    /// Areas without a parent, ordered by id
    async fn list_provinces(&self) -> Result<Vec<Area>, RepositoryError>;

    /// Direct children of an area, ordered by id
    async fn list_children(&self, parent_id: i64) -> Result<Vec<Area>, RepositoryError>;
}
