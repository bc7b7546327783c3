use crate::calculators::BonusCalculator;
use crate::engine::TOP_PRODUCTS_LIMIT;
use crate::models::{ProductTally, ReportRow, SellerAccumulator, TopProduct};
use crate::types::round_money;

/// Orders sellers by profit (highest first), assigns bonuses by rank and emits report rows.
///
/// The sort is stable: sellers with equal profit keep their input order.
pub fn rank_sellers(mut sellers: Vec<SellerAccumulator>, bonus: &dyn BonusCalculator) -> Vec<ReportRow> {
    sellers.sort_by(|left, right| right.profit.cmp(&left.profit));

    let total = sellers.len();

    sellers.into_iter()
        .enumerate()
        .map(|(index, seller)| {
            let seller_bonus = bonus.calculate_bonus(index, total, &seller);

            ReportRow {
                top_products: top_products(&seller.products_sold),
                seller_id: seller.id,
                name: seller.name,
                revenue: round_money(seller.revenue),
                profit: round_money(seller.profit),
                sales_count: seller.sales_count,
                bonus: round_money(seller_bonus)
            }
        })
        .collect()
}

/// The best selling skus by units, at most [`TOP_PRODUCTS_LIMIT`]; ties keep first-sold order.
pub fn top_products(products_sold: &ProductTally) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = products_sold.iter()
        .map(|(sku, quantity)| TopProduct { sku: sku.to_string(), quantity })
        .collect();

    products.sort_by(|left, right| right.quantity.cmp(&left.quantity));
    products.truncate(TOP_PRODUCTS_LIMIT);

    products
}
