use crate::models::errors::AnalysisError;
use crate::models::{LineItem, Product, PurchaseRecord, Seller};
use crate::types::{Quantity, SellerId, Sku};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Running totals for a single seller while purchase records are folded in.
///
/// Revenue comes from receipt totals, profit from per-item revenue minus cost.
/// Profit is not clamped and goes negative when cost exceeds revenue.
#[derive(Debug, Clone)]
pub struct SellerAccumulator {
    /// The seller this accumulator belongs to.
    pub id: SellerId,
    /// Display name, `"{first_name} {last_name}"`.
    pub name: String,
    /// Sum of `total_amount` over every matched receipt.
    pub revenue: Decimal,
    /// Sum of item revenue minus item cost over every matched line item.
    pub profit: Decimal,
    /// Number of matched receipts.
    pub sales_count: u64,
    /// Units sold per sku, in the order the skus were first sold.
    pub products_sold: ProductTally
}

impl SellerAccumulator {
    /// Creates an empty accumulator for the given seller.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            products_sold: ProductTally::default()
        }
    }

    /// Counts one receipt and adds its total to revenue.
    ///
    /// # Errors
    /// Returns `AnalysisError::Overflow` if revenue no longer fits a `Decimal`; the
    /// accumulator is left unchanged.
    pub fn record_sale(&mut self, record: &PurchaseRecord) -> Result<(), AnalysisError> {
        self.revenue = self.revenue.checked_add(record.total_amount)
            .ok_or_else(|| AnalysisError::seller_overflow(&self.id))?;

        self.sales_count += 1;

        Ok(())
    }

    /// Adds one line item's profit and quantity under the product's sku.
    ///
    /// `item_revenue` is computed by the caller's revenue strategy; the cost is
    /// `purchase_price * quantity`.
    ///
    /// # Errors
    /// Returns `AnalysisError::Overflow` if cost or profit no longer fits a `Decimal`.
    pub fn record_item(&mut self, item: &LineItem, product: &Product, item_revenue: Decimal) -> Result<(), AnalysisError> {
        let profit = product.purchase_price.checked_mul(Decimal::from(item.quantity))
            .and_then(|cost| item_revenue.checked_sub(cost))
            .and_then(|item_profit| self.profit.checked_add(item_profit))
            .ok_or_else(|| AnalysisError::seller_overflow(&self.id))?;

        self.profit = profit;
        self.products_sold.add(&product.sku, item.quantity);

        Ok(())
    }
}

/// Insertion-ordered `sku -> units` counter.
#[derive(Debug, Clone, Default)]
pub struct ProductTally {
    entries: Vec<(Sku, u64)>,
    positions: HashMap<Sku, usize>
}

impl ProductTally {
    pub fn add(&mut self, sku: &str, quantity: Quantity) {
        match self.positions.get(sku) {
            Some(&position) => self.entries[position].1 = self.entries[position].1.saturating_add(u64::from(quantity)),
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), u64::from(quantity)));
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(sku, units)` in first-sold order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(sku, quantity)| (sku.as_str(), *quantity))
    }
}
