use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{SellerId, Sku};

/// A seller from the reference catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String
}

impl Seller {
    /// Display name used in the report, `"{first_name} {last_name}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A product card. Only the fields needed for cost calculation are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub sku: Sku,
    #[serde(default)]
    pub purchase_price: Decimal
}
