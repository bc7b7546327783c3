use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input data: {reason}")]
    InvalidInput {
        reason: String
    },
    #[error("Missing calculation callbacks: {missing}")]
    MissingCallbacks {
        missing: String
    },
    #[error("Numeric overflow occurred while aggregating {context}")]
    Overflow {
        context: String
    }
}

impl AnalysisError {
    pub fn missing_data() -> Self {
        Self::InvalidInput { reason: "data is missing".to_string() }
    }

    pub fn empty_collection(name: &str) -> Self {
        Self::InvalidInput { reason: format!("'{name}' must be a non-empty list") }
    }

    pub fn malformed(error: serde_json::Error) -> Self {
        Self::InvalidInput { reason: error.to_string() }
    }

    pub fn missing_callbacks(names: &[&str]) -> Self {
        Self::MissingCallbacks { missing: names.join(", ") }
    }

    pub fn seller_overflow(seller_id: &str) -> Self {
        Self::Overflow { context: format!("totals for seller [{seller_id}]") }
    }

    pub fn item_overflow(sku: &str) -> Self {
        Self::Overflow { context: format!("line item [{sku}]") }
    }
}
