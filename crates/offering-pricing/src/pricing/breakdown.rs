//! Per-tier, per-cycle pricing breakdown
//!
//! Each tier has a monthly base price, an optional one-off setup fee and an
//! optional discount per billing cycle. The breakdown runs the effective
//! price calculator once for every (tier × cycle) pair.

use super::cycles::total_for_cycle;
use super::effective::calculate_effective_price;
use offering_common::{
    BillingCycle, DiscountRule, Money, PriceComputationResult, PricingError, DISPLAY_DECIMAL_PLACES,
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Discount attached to one billing cycle of a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDiscount {
    pub cycle: BillingCycle,
    pub discount: DiscountRule,
}

/// Subscription pricing level
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: String,
    pub name: String,
    /// Sort key in the editor; lower comes first
    #[serde(default)]
    pub display_order: i32,
    /// Base price for one month of service
    pub monthly_price: Money,
    /// Charged once when the subscription starts
    #[serde(default)]
    pub setup_fee: Option<Money>,
    #[serde(default)]
    pub setup_discount: Option<DiscountRule>,
    #[serde(default)]
    pub cycle_discounts: Vec<CycleDiscount>,
}

impl Tier {
    pub fn new(id: impl Into<String>, name: impl Into<String>, monthly_price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_order: 0,
            monthly_price,
            setup_fee: None,
            setup_discount: None,
            cycle_discounts: Vec::new(),
        }
    }

    pub fn with_display_order(mut self, order: i32) -> Self {
        self.display_order = order;
        self
    }

    pub fn with_setup_fee(mut self, fee: Money, discount: Option<DiscountRule>) -> Self {
        self.setup_fee = Some(fee);
        self.setup_discount = discount;
        self
    }

    /// Set the discount for a cycle, replacing any existing one
    pub fn with_cycle_discount(mut self, cycle: BillingCycle, discount: DiscountRule) -> Self {
        self.cycle_discounts.retain(|d| d.cycle != cycle);
        self.cycle_discounts.push(CycleDiscount { cycle, discount });
        self
    }

    pub fn discount_for(&self, cycle: BillingCycle) -> Option<DiscountRule> {
        self.cycle_discounts
            .iter()
            .find(|d| d.cycle == cycle)
            .map(|d| d.discount)
    }
}

/// One billing cycle of one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRow {
    pub cycle: BillingCycle,
    pub label: &'static str,
    pub months: u32,
    /// Monthly price × months, before discount
    pub cycle_total: Money,
    pub pricing: PriceComputationResult,
    /// Effective cycle charge spread over its months, rounded to cents
    pub effective_monthly: Money,
}

/// All cycle rows for one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBreakdown {
    pub tier_id: String,
    pub tier_name: String,
    pub setup: Option<PriceComputationResult>,
    pub rows: Vec<CycleRow>,
}

impl TierBreakdown {
    pub fn row(&self, cycle: BillingCycle) -> Option<&CycleRow> {
        self.rows.iter().find(|r| r.cycle == cycle)
    }

    /// Recurring row with the lowest effective monthly price
    pub fn best_value(&self) -> Option<&CycleRow> {
        self.rows
            .iter()
            .filter(|r| r.cycle.is_recurring())
            .min_by(|a, b| a.effective_monthly.amount.cmp(&b.effective_monthly.amount))
    }
}

/// Tiers ordered by display order, ties broken by name
pub fn sort_tiers(tiers: &[Tier]) -> Vec<&Tier> {
    let mut sorted: Vec<&Tier> = tiers.iter().collect();
    sorted.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

fn price_row(tier: &Tier, cycle: BillingCycle) -> Result<CycleRow, PricingError> {
    let cycle_total = total_for_cycle(&tier.monthly_price, cycle)?;
    let pricing = calculate_effective_price(&cycle_total, tier.discount_for(cycle))?;

    let months = cycle.months();
    let effective_monthly = (pricing.effective_amount.amount / Decimal::from(months))
        .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    Ok(CycleRow {
        cycle,
        label: cycle.label(),
        months,
        effective_monthly: pricing.effective_amount.with_amount(effective_monthly),
        cycle_total,
        pricing,
    })
}

/// Price a single tier across the given cycles
pub fn price_tier(tier: &Tier, cycles: &[BillingCycle]) -> Result<TierBreakdown, PricingError> {
    let setup = tier
        .setup_fee
        .as_ref()
        .map(|fee| calculate_effective_price(fee, tier.setup_discount))
        .transpose()?;

    let rows = cycles
        .iter()
        .map(|cycle| price_row(tier, *cycle))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(tier = %tier.id, rows = rows.len(), "priced tier");

    Ok(TierBreakdown {
        tier_id: tier.id.clone(),
        tier_name: tier.name.clone(),
        setup,
        rows,
    })
}

/// Price every tier, in display order, across the given cycles
#[instrument(skip_all, fields(tiers = tiers.len(), cycles = cycles.len()))]
pub fn build_breakdown(
    tiers: &[Tier],
    cycles: &[BillingCycle],
) -> Result<Vec<TierBreakdown>, PricingError> {
    sort_tiers(tiers)
        .into_iter()
        .map(|tier| price_tier(tier, cycles))
        .collect()
}
