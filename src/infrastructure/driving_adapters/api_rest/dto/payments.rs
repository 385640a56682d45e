//! Payment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::payment::Payment;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPaymentDto {
    #[validate(length(min = 1, max = 200, message = "trade_no must be between 1 and 200 characters"))]
    pub trade_no: String,
}

/// Returned after a payment is recorded
#[derive(Debug, Clone, Serialize)]
pub struct TradeIdResponseDto {
    pub trade_id: String,
}

impl From<Payment> for TradeIdResponseDto {
    fn from(payment: Payment) -> Self {
        Self {
            trade_id: payment.trade_no,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponseDto {
    pub order_id: String,
    pub trade_no: String,
    pub create_time: DateTime<Utc>,
}

impl From<Payment> for PaymentResponseDto {
    fn from(payment: Payment) -> Self {
        Self {
            order_id: payment.order_id,
            trade_no: payment.trade_no,
            create_time: payment.create_time,
        }
    }
}
