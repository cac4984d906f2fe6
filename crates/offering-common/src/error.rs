//! Error types for offering pricing
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using OfferingError
pub type Result<T> = std::result::Result<T, OfferingError>;

/// Unified error type for offering operations
#[derive(Debug, Error)]
pub enum OfferingError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Storage errors (reading catalog documents)
    #[error("Storage error: {0}")]
    Storage(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Pricing calculation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    #[error("Budget exceeded: price {price} > budget {budget}")]
    BudgetExceeded { price: String, budget: String },

    #[error("Pricing calculation overflow")]
    Overflow,
}

impl PricingError {
    /// Shorthand for an unrecognised enum name
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        PricingError::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }
}

// Implement From for common external error types
impl From<serde_json::Error> for OfferingError {
    fn from(err: serde_json::Error) -> Self {
        OfferingError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for OfferingError {
    fn from(err: std::io::Error) -> Self {
        OfferingError::Storage(err.to_string())
    }
}
