mod monetary;
#[cfg(test)]
mod tests;

pub use monetary::{percent_multiplier, round_money, MONEY_DECIMAL_PLACES};

pub type SellerId = String;
pub type Sku = String;
pub type Quantity = u32;
