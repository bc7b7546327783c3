mod accumulator;
mod dataset;
mod errors;
mod purchase;
mod report;
mod seller;

pub use accumulator::{ProductTally, SellerAccumulator};
pub use dataset::SalesData;
pub use errors::AnalysisError;
pub use purchase::{LineItem, PurchaseRecord};
pub use report::{ReportRow, TopProduct};
pub use seller::{Product, Seller};
