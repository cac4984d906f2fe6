//! # Offering Common
//!
//! Shared types and errors for service-offering pricing.
//!
//! ## Core Types
//!
//! - [`Money`]: amount plus ISO 4217-like currency code
//! - [`BillingCycle`]: recurrence period with a fixed month count
//! - [`DiscountRule`]: percentage or flat reduction of a base price
//! - [`PriceComputationResult`]: effective price, savings and savings percent
//!
//! Everything here is a plain value: no identity, no persistence.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{OfferingError, PricingError, Result};
pub use types::{
    billing_cycle::BillingCycle,
    discount::{DiscountRule, DiscountType, PriceComputationResult},
    money::{normalize_currency, Money, DEFAULT_CURRENCY},
};

/// Offering common version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentage discounts are expressed on a 0-100 scale
pub const MAX_PERCENTAGE_DISCOUNT: u32 = 100;

/// Decimal places shown for every formatted price
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;
