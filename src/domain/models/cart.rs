//! Cart items
//!
//! A line of the shopping cart as carried by anonymous visitors.

/// One cart line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub sku_id: i64,
    pub count: u32,
    pub selected: bool,
}
