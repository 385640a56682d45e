//! Cart Store Gateway

use async_trait::async_trait;

use crate::domain::models::cart::CartItem;
use crate::domain::models::user::UserId;
use crate::shared::errors::RepositoryError;

/// Server-side shopping cart of a logged-in user
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Overwrite counts and selection state for the given items
    async fn merge(&self, user_id: UserId, items: &[CartItem]) -> Result<(), RepositoryError>;
}
