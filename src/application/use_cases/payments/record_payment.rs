//! Record Payment Use Case
//!
//! Stores the gateway's trade number for an order and moves the order from
//! unpaid to awaiting shipment.

use std::sync::Arc;

use crate::domain::gateways::PaymentRepository;
use crate::domain::models::payment::Payment;
use crate::domain::models::user::UserId;
use crate::shared::errors::{DomainError, UseCaseError};

use super::find_owned_order;

pub struct RecordPaymentUseCase {
    repository: Arc<dyn PaymentRepository>,
}

impl RecordPaymentUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the order is not the user's,
    /// `UseCaseError::Domain` if it is not awaiting payment.
    pub async fn execute(&self, user_id: UserId, order_id: &str, trade_no: &str) -> Result<Payment, UseCaseError> {
        if trade_no.trim().is_empty() {
            return Err(UseCaseError::invalid("trade_no: must not be empty"));
        }

        let order = find_owned_order(self.repository.as_ref(), user_id, order_id).await?;
        if !order.is_payable() {
            tracing::warn!(order_id, status = ?order.status, "Order is not awaiting payment");
            return Err(DomainError::OrderNotPayable(order_id.to_string()).into());
        }

        // The status is re-checked inside the write; a concurrent payment loses here.
        let payment = self
            .repository
            .record(order_id, trade_no)
            .await?
            .ok_or_else(|| DomainError::OrderNotPayable(order_id.to_string()))?;

        tracing::info!(order_id, trade_id = payment.id, "Payment recorded");
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::payment::OrderStatus;
    use crate::infrastructure::driven_adapters::in_memory::InMemoryDatabase;

    const ORDER_ID: &str = "20240101120000000000001";

    #[tokio::test]
    async fn should_record_payment_and_advance_order() {
        let db = Arc::new(InMemoryDatabase::new());
        db.seed_order(ORDER_ID, UserId::new(1), OrderStatus::Unpaid);

        let use_case = RecordPaymentUseCase::new(db.clone());
        let payment = use_case.execute(UserId::new(1), ORDER_ID, "T-0001").await.unwrap();

        assert_eq!(payment.trade_no, "T-0001");
        assert_eq!(db.order_status(ORDER_ID), Some(OrderStatus::Unsent));
    }

    #[tokio::test]
    async fn should_refuse_second_payment() {
        let db = Arc::new(InMemoryDatabase::new());
        db.seed_order(ORDER_ID, UserId::new(1), OrderStatus::Unpaid);
        let use_case = RecordPaymentUseCase::new(db);

        use_case.execute(UserId::new(1), ORDER_ID, "T-0001").await.unwrap();
        let result = use_case.execute(UserId::new(1), ORDER_ID, "T-0002").await;

        assert!(matches!(
            result,
            Err(UseCaseError::Domain(DomainError::OrderNotPayable(_)))
        ));
    }

    #[tokio::test]
    async fn should_hide_other_users_orders() {
        let db = Arc::new(InMemoryDatabase::new());
        db.seed_order(ORDER_ID, UserId::new(1), OrderStatus::Unpaid);
        let use_case = RecordPaymentUseCase::new(db);

        let result = use_case.execute(UserId::new(2), ORDER_ID, "T-0001").await;
        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }
}
