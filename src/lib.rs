//! Seller performance report: per-seller revenue, profit, units sold, top products
//! and a rank-based bonus, computed from sales records.
//!
//! ```no_run
//! use seller_report::calculators::AnalysisOptions;
//! use seller_report::engine::analyze_sales_data;
//! use seller_report::models::SalesData;
//!
//! # fn main() -> anyhow::Result<()> {
//! let data = SalesData::from_json_str(&std::fs::read_to_string("data.json")?)?;
//! let report = analyze_sales_data(&data, &AnalysisOptions::standard())?;
//! # Ok(())
//! # }
//! ```

pub mod calculators;
pub mod engine;
pub mod models;
pub mod types;
