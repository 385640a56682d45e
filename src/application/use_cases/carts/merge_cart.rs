//! Merge Cart Use Case
//!
//! Folds the cart an anonymous visitor kept in a cookie into the server-side
//! cart once they log in. Cookie values win over stored ones.

use std::sync::Arc;

use crate::domain::gateways::CartStore;
use crate::domain::models::cart::CartItem;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

pub struct MergeCartUseCase {
    cart_store: Arc<dyn CartStore>,
}

impl MergeCartUseCase {
    #[must_use]
    pub fn new(cart_store: Arc<dyn CartStore>) -> Self {
        Self { cart_store }
    }

    /// Execute the use case. Items with a zero count are ignored.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the cart store fails.
    pub async fn execute(&self, user_id: UserId, items: Vec<CartItem>) -> Result<usize, UseCaseError> {
        let items: Vec<CartItem> = items.into_iter().filter(|item| item.count > 0).collect();
        if items.is_empty() {
            return Ok(0);
        }

        self.cart_store.merge(user_id, &items).await?;
        tracing::info!(user_id = %user_id, merged = items.len(), "Merged cookie cart");
        Ok(items.len())
    }
}
