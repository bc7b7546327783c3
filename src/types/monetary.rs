use rust_decimal::{Decimal, RoundingStrategy};

pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a money value to two decimal places, midpoints away from zero.
///
/// The result always carries a scale of two, so `100` renders as `100.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Converts a percentage discount into the fraction of the price that remains.
///
/// Values outside 0..=100 are not clamped: `150` yields `-0.5`.
pub fn percent_multiplier(discount: Decimal) -> Decimal {
    Decimal::ONE - discount / Decimal::ONE_HUNDRED
}
