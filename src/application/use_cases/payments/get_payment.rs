//! Get Payment Use Case

use std::sync::Arc;

use crate::domain::gateways::PaymentRepository;
use crate::domain::models::payment::Payment;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

use super::find_owned_order;

pub struct GetPaymentUseCase {
    repository: Arc<dyn PaymentRepository>,
}

impl GetPaymentUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the order is not the user's or is unpaid.
    pub async fn execute(&self, user_id: UserId, order_id: &str) -> Result<Payment, UseCaseError> {
        find_owned_order(self.repository.as_ref(), user_id, order_id).await?;

        self.repository
            .find_by_order(order_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Payment", order_id))
    }
}
