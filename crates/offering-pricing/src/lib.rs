//! # Offering Pricing
//!
//! Pricing utilities for the service-offering editors.
//!
//! ## Effective Price
//!
//! ```text
//! effective = max(0, base - discount)
//! savings   = base - effective
//! savings % = round(savings / base × 100)
//! ```
//!
//! Where the discount is either a percentage of the base (clamped at 100%)
//! or a flat amount (clamped at the base).
//!
//! ## Modules
//!
//! - [`pricing::cycles`]: billing cycle metadata and per-cycle totals
//! - [`pricing::format`]: fixed-rule price formatting
//! - [`pricing::effective`]: effective price calculator
//! - [`pricing::breakdown`]: tier × cycle breakdowns
//! - [`catalog`]: catalog documents and quotes

pub mod catalog;
pub mod pricing;

pub use catalog::{Catalog, Quote, QuoteLine};
pub use pricing::{
    build_breakdown, calculate_effective_price, cycle_info, format_money, format_price,
    lookup_cycle, total_for_cycle, BudgetStatus, CycleInfo, Tier, TierBreakdown,
};
