use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{Quantity, SellerId, Sku};

/// One receipt: a purchase event attributed to a seller.
///
/// `total_amount` is the receipt total as charged and feeds the seller's revenue
/// directly. The per-item figures only feed profit. A record without a `seller_id`
/// matches no seller and is skipped during aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub items: Vec<LineItem>
}

/// A single product/quantity entry within a purchase record.
///
/// An item without a `sku` matches no product and is skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub sku: Option<Sku>,
    #[serde(default)]
    pub quantity: Quantity,
    /// Percentage discount, nominally 0..=100 but not enforced.
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub sale_price: Decimal
}
