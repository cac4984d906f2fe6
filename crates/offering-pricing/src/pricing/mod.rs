//! Pricing module
//!
//! Pure, synchronous helpers shared by the catalog and matrix editors:
//! - Billing cycle metadata and per-cycle totals
//! - Price formatting
//! - Effective price with percentage or flat discounts
//! - Tier × cycle breakdowns, add-on totals and budget checks

pub mod breakdown;
pub mod budget;
pub mod cycles;
pub mod effective;
pub mod format;
pub mod options;

pub use breakdown::{
    build_breakdown, price_tier, sort_tiers, CycleDiscount, CycleRow, Tier, TierBreakdown,
};
pub use budget::{compare_to_budget, ensure_within_budget, BudgetStatus};
pub use cycles::{cycle_info, lookup_cycle, total_for_cycle, CycleInfo};
pub use effective::calculate_effective_price;
pub use format::{format_cycle_price, format_money, format_price};
pub use options::{add_on_monthly_total, OptionGroup, OptionPricing};
