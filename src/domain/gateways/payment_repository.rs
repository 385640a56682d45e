//! Payment Repository Gateway

use async_trait::async_trait;

use crate::domain::models::payment::{Order, Payment};
use crate::shared::errors::RepositoryError;

/// Persistence of payment records and the order state they drive
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_order(&self, order_id: &str) -> Result<Option<Order>, RepositoryError>;

    async fn find_by_order(&self, order_id: &str) -> Result<Option<Payment>, RepositoryError>;

    /// Insert the payment and move the order from unpaid to unsent atomically.
    ///
    /// Returns `None` when the order was no longer unpaid.
    async fn record(&self, order_id: &str, trade_no: &str) -> Result<Option<Payment>, RepositoryError>;
}
