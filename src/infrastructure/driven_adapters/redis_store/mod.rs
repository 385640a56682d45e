//! Redis Stores
//!
//! Short-lived and per-user state kept in Redis: SMS codes, browsing
//! history and the server-side cart. Multi-key writes go through one
//! pipeline each.

mod cart;
mod history;
mod verification;

pub use cart::RedisCartStore;
pub use history::RedisHistoryStore;
pub use verification::RedisVerificationStore;

use crate::domain::models::user::UserId;

pub(crate) fn sms_code_key(mobile: &str) -> String {
    format!("sms_{mobile}")
}

pub(crate) fn sms_flag_key(mobile: &str) -> String {
    format!("sms_flag_{mobile}")
}

pub(crate) fn history_key(user_id: UserId) -> String {
    format!("history_{user_id}")
}

pub(crate) fn cart_key(user_id: UserId) -> String {
    format!("cart_{user_id}")
}

pub(crate) fn cart_selected_key(user_id: UserId) -> String {
    format!("cart_selected_{user_id}")
}
