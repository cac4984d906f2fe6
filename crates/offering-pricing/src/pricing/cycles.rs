//! Billing cycle metadata lookup

use offering_common::{BillingCycle, Money, PricingError};
use rust_decimal::Decimal;
use serde::Serialize;

/// Display metadata for one billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleInfo {
    pub cycle: BillingCycle,
    /// Months covered by one charge (always positive)
    pub months: u32,
    /// Short human label, e.g. "Quarterly"
    pub label: &'static str,
    /// Price suffix, e.g. "/qtr"
    pub suffix: &'static str,
}

/// Metadata for a known cycle
pub fn cycle_info(cycle: BillingCycle) -> CycleInfo {
    CycleInfo {
        cycle,
        months: cycle.months(),
        label: cycle.label(),
        suffix: cycle.price_suffix(),
    }
}

/// Metadata for a cycle name read from a document
///
/// Unknown names are a data-integrity error and fail with
/// [`PricingError::InvalidEnumValue`]; there is no fallback cycle.
pub fn lookup_cycle(name: &str) -> Result<CycleInfo, PricingError> {
    name.parse::<BillingCycle>().map(cycle_info)
}

/// Undiscounted charge for one cycle: `monthly × months`
pub fn total_for_cycle(monthly: &Money, cycle: BillingCycle) -> Result<Money, PricingError> {
    monthly.checked_mul(Decimal::from(cycle.months()))
}
