mod bonus;
mod revenue;

use rust_decimal::Decimal;

use crate::models::{AnalysisError, LineItem, Product, SellerAccumulator};

pub use bonus::ProfitRankBonus;
pub use revenue::SimpleRevenue;

/// Strategy for the revenue of a single line item.
///
/// Returns `AnalysisError::Overflow` when the amount cannot be represented.
pub trait RevenueCalculator {
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Result<Decimal, AnalysisError>;
}

/// Strategy for a seller's bonus given its 0-based rank in profit-descending order.
pub trait BonusCalculator {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerAccumulator) -> Decimal;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> Decimal,
{
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Result<Decimal, AnalysisError> {
        Ok(self(item, product))
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> Decimal,
{
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        self(index, total, seller)
    }
}

/// The strategies an analysis run is configured with.
///
/// `AnalysisOptions::default()` carries no strategies and is rejected by the analysis;
/// use [`AnalysisOptions::standard`] for the stock rules.
#[derive(Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    pub calculate_bonus: Option<Box<dyn BonusCalculator>>
}

impl AnalysisOptions {
    pub fn standard() -> Self {
        Self::default()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus)
    }

    pub fn with_revenue(mut self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    pub fn with_bonus(mut self, calculator: impl BonusCalculator + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }
}
