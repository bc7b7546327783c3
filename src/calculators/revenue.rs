use rust_decimal::Decimal;

use crate::calculators::RevenueCalculator;
use crate::models::{AnalysisError, LineItem, Product};
use crate::types::percent_multiplier;

/// `sale_price * quantity * (1 - discount / 100)`.
///
/// The product card is not consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn calculate_revenue(&self, item: &LineItem, _product: &Product) -> Result<Decimal, AnalysisError> {
        item.sale_price.checked_mul(Decimal::from(item.quantity))
            .and_then(|gross| gross.checked_mul(percent_multiplier(item.discount)))
            .ok_or_else(|| AnalysisError::item_overflow(item.sku.as_deref().unwrap_or_default()))
    }
}
