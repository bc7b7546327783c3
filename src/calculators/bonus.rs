use rust_decimal::Decimal;

use crate::calculators::BonusCalculator;
use crate::models::SellerAccumulator;
use crate::types::round_money;

/// Rank-based share of profit:
///
/// | rank | share |
/// |---|---|
/// | first | 15% |
/// | second, third | 10% |
/// | last | 0 |
/// | anyone else | 5% |
///
/// Ranks are checked top-down, so a lone seller is first rather than last, and
/// with two or three sellers the last one still gets 10%.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRankBonus;

impl ProfitRankBonus {
    fn rate(index: usize, total: usize) -> Decimal {
        match index {
            0 => Decimal::new(15, 2),
            1 | 2 => Decimal::new(10, 2),
            index if index + 1 == total => Decimal::ZERO,
            _ => Decimal::new(5, 2)
        }
    }
}

impl BonusCalculator for ProfitRankBonus {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        round_money(seller.profit * Self::rate(index, total))
    }
}
