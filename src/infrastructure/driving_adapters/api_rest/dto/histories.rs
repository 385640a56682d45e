//! Browse History DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::sku::Sku;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct BrowseHistoryDto {
    #[validate(range(min = 1, message = "sku_id must be a positive id"))]
    pub sku_id: i64,
}

/// SKU summary as shown in the history list
#[derive(Debug, Clone, Serialize)]
pub struct HistorySkuResponseDto {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub default_image_url: String,
    pub comments: i32,
}

impl From<Sku> for HistorySkuResponseDto {
    fn from(sku: Sku) -> Self {
        Self {
            id: sku.id,
            name: sku.name,
            price: sku.price,
            default_image_url: sku.default_image_url,
            comments: sku.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_serializes_as_string() {
        let dto = HistorySkuResponseDto::from(Sku {
            id: 3,
            name: "iPhone".into(),
            price: dec!(6499.00),
            default_image_url: "group1/M00/00/02/a.jpg".into(),
            comments: 12,
            is_launched: true,
        });

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["price"], "6499.00");
        assert!(json.get("is_launched").is_none());
    }

    #[test]
    fn test_sku_id_must_be_positive() {
        assert!(BrowseHistoryDto { sku_id: 0 }.validate().is_err());
        assert!(BrowseHistoryDto { sku_id: 1 }.validate().is_ok());
    }
}
