//! Anonymous Cart Cookie
//!
//! The storefront keeps a guest cart in the `cart` cookie as base64 encoded
//! JSON: `{"<sku_id>": {"count": 2, "selected": true}}`.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::cart::CartItem;

/// Name of the guest cart cookie
pub const CART_COOKIE: &str = "cart";

#[derive(Debug, Error)]
pub enum CartCookieError {
    #[error("cart cookie is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("cart cookie is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cart cookie has a non-numeric sku id: {0}")]
    SkuId(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct CookieEntry {
    count: u32,
    #[serde(default)]
    selected: bool,
}

/// Decode the cookie value into cart items, ordered by SKU id
///
/// # Errors
///
/// Returns `CartCookieError` when the value is not base64 JSON of the
/// expected shape.
pub fn decode_cart_cookie(value: &str) -> Result<Vec<CartItem>, CartCookieError> {
    let bytes = STANDARD.decode(value.trim())?;
    let entries: HashMap<String, CookieEntry> = serde_json::from_slice(&bytes)?;

    let mut items = entries
        .into_iter()
        .map(|(sku_id, entry)| {
            let sku_id = sku_id.parse().map_err(|_| CartCookieError::SkuId(sku_id))?;
            Ok(CartItem {
                sku_id,
                count: entry.count,
                selected: entry.selected,
            })
        })
        .collect::<Result<Vec<_>, CartCookieError>>()?;
    items.sort_by_key(|item| item.sku_id);
    Ok(items)
}

/// Encode cart items the way the storefront does
#[must_use]
pub fn encode_cart_cookie(items: &[CartItem]) -> String {
    let entries: HashMap<String, CookieEntry> = items
        .iter()
        .map(|item| {
            (
                item.sku_id.to_string(),
                CookieEntry {
                    count: item.count,
                    selected: item.selected,
                },
            )
        })
        .collect();
    // A map of plain structs always serializes
    STANDARD.encode(serde_json::to_vec(&entries).unwrap_or_default())
}
