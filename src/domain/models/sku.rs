//! SKU read model
//!
//! The subset of a sellable product variant needed by browsing history.

use rust_decimal::Decimal;

/// Number of SKUs remembered per user in browsing history
pub const HISTORY_LIMIT: usize = 5;

/// A sellable product variant
#[derive(Debug, Clone, PartialEq)]
pub struct Sku {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub default_image_url: String,
    pub comments: i32,
    pub is_launched: bool,
}
