//! Payment Use Cases

mod get_payment;
mod record_payment;

pub use get_payment::GetPaymentUseCase;
pub use record_payment::RecordPaymentUseCase;

use crate::domain::gateways::PaymentRepository;
use crate::domain::models::payment::Order;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Orders of other users are reported as missing
async fn find_owned_order(
    repository: &dyn PaymentRepository,
    user_id: UserId,
    order_id: &str,
) -> Result<Order, UseCaseError> {
    repository
        .find_order(order_id)
        .await?
        .filter(|order| order.user_id == user_id)
        .ok_or_else(|| UseCaseError::not_found("Order", order_id))
}
