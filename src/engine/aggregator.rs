use crate::calculators::RevenueCalculator;
use crate::models::{AnalysisError, Product, SalesData, SellerAccumulator};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Folds every purchase record into per-seller accumulators.
///
/// The returned accumulators follow the order of `data.sellers`. A seller id that
/// appears more than once is owned by its first occurrence. Records without a known
/// seller and items without a known sku are skipped.
///
/// # Errors
/// Returns `AnalysisError::Overflow` if a running total or an item amount no longer
/// fits a `Decimal`, or whatever error the revenue strategy reports.
pub fn aggregate(data: &SalesData, revenue: &dyn RevenueCalculator) -> Result<Vec<SellerAccumulator>, AnalysisError> {
    let mut sellers = Vec::with_capacity(data.sellers.len());
    let mut seller_index = HashMap::<&str, usize>::with_capacity(data.sellers.len());

    for seller in &data.sellers {
        if seller_index.contains_key(seller.id.as_str()) {
            warn!("Duplicate seller [{}] ignored", seller.id);
            continue;
        }

        seller_index.insert(seller.id.as_str(), sellers.len());
        sellers.push(SellerAccumulator::new(seller));
    }

    let product_index: HashMap<&str, &Product> = data.products.iter()
        .map(|product| (product.sku.as_str(), product))
        .collect();

    for record in &data.purchase_records {
        let Some(&position) = record.seller_id.as_deref().and_then(|id| seller_index.get(id)) else {
            debug!("Purchase record for unknown seller [{:?}] skipped", record.seller_id);
            continue;
        };

        let seller = &mut sellers[position];
        seller.record_sale(record)?;

        for item in &record.items {
            let Some(&product) = item.sku.as_deref().and_then(|sku| product_index.get(sku)) else {
                debug!("Line item for unknown sku [{:?}] skipped for seller [{}]", item.sku, seller.id);
                continue;
            };

            let item_revenue = revenue.calculate_revenue(item, product)?;
            seller.record_item(item, product, item_revenue)?;
        }
    }

    Ok(sellers)
}
