//! Payment Domain Model
//!
//! A payment record ties the payment gateway's trade number to an order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::user::UserId;

/// Order status codes as stored in `order_info.status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Unpaid,
    Unsent,
    Unreceived,
    Uncommented,
    Finished,
    Canceled,
}

impl OrderStatus {
    #[must_use]
    pub fn code(self) -> i16 {
        match self {
            Self::Unpaid => 1,
            Self::Unsent => 2,
            Self::Unreceived => 3,
            Self::Uncommented => 4,
            Self::Finished => 5,
            Self::Canceled => 6,
        }
    }

    #[must_use]
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Unpaid),
            2 => Some(Self::Unsent),
            3 => Some(Self::Unreceived),
            4 => Some(Self::Uncommented),
            5 => Some(Self::Finished),
            6 => Some(Self::Canceled),
            _ => None,
        }
    }
}

/// The parts of an order payments care about
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: String,
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl Order {
    #[must_use]
    pub fn is_payable(&self) -> bool {
        self.status == OrderStatus::Unpaid
    }
}

/// A recorded payment
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: i64,
    pub order_id: String,
    pub trade_no: String,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}
