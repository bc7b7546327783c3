use serde::Deserialize;
use serde_json::Value;

use crate::models::errors::AnalysisError;
use crate::models::{Product, PurchaseRecord, Seller};

/// The complete input of one analysis run.
///
/// Deserialization enforces the shape (all three lists present and actually lists);
/// [`SalesData::validate`] enforces that none of them is empty. Unknown fields in the
/// source document are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidInput` if the document is not valid JSON, is `null`,
    /// lacks one of the three lists, has a list of the wrong type, or has an empty list.
    pub fn from_json_str(json: &str) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_str(json).map_err(AnalysisError::malformed)?;
        Self::from_value(value)
    }

    /// Same as [`SalesData::from_json_str`] for an already parsed document.
    pub fn from_value(value: Value) -> Result<Self, AnalysisError> {
        if value.is_null() {
            return Err(AnalysisError::missing_data());
        }

        let data: SalesData = serde_json::from_value(value).map_err(AnalysisError::malformed)?;
        data.validate()?;

        Ok(data)
    }

    /// Checks that every required list has at least one entry.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sellers.is_empty() {
            return Err(AnalysisError::empty_collection("sellers"));
        }

        if self.products.is_empty() {
            return Err(AnalysisError::empty_collection("products"));
        }

        if self.purchase_records.is_empty() {
            return Err(AnalysisError::empty_collection("purchase_records"));
        }

        Ok(())
    }
}
