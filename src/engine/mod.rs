mod aggregator;
mod ranker;

use tracing::info;

use crate::calculators::AnalysisOptions;
use crate::models::{AnalysisError, ReportRow, SalesData};

pub use aggregator::aggregate;
pub use ranker::{rank_sellers, top_products};

/// Maximum number of entries in a seller's `top_products`.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Builds the seller report: one row per distinct seller, ordered by profit descending.
///
/// # Errors
/// - `AnalysisError::InvalidInput` if any of the three input lists is empty.
/// - `AnalysisError::MissingCallbacks` if either strategy is absent from `options`.
/// - `AnalysisError::Overflow` if an amount or running total exceeds the `Decimal` range.
///
/// The first two checks run before any aggregation. Purchase records with an unknown seller and
/// line items with an unknown sku are skipped, never reported as errors.
pub fn analyze_sales_data(data: &SalesData, options: &AnalysisOptions) -> Result<Vec<ReportRow>, AnalysisError> {
    data.validate()?;

    let (revenue, bonus) = match (&options.calculate_revenue, &options.calculate_bonus) {
        (Some(revenue), Some(bonus)) => (&**revenue, &**bonus),
        (None, Some(_)) => return Err(AnalysisError::missing_callbacks(&["calculate_revenue"])),
        (Some(_), None) => return Err(AnalysisError::missing_callbacks(&["calculate_bonus"])),
        (None, None) => return Err(AnalysisError::missing_callbacks(&["calculate_revenue", "calculate_bonus"]))
    };

    let sellers = aggregate(data, revenue)?;
    let report = rank_sellers(sellers, bonus);

    info!("Analyzed {} purchase records for {} sellers", data.purchase_records.len(), report.len());

    Ok(report)
}
