use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{SellerId, Sku};

/// One line of the final seller report. Money fields are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: Decimal
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64
}
