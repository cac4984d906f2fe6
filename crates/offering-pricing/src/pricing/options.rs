//! Option groups: bundles of services either included in a tier or sold as
//! paid add-ons

use offering_common::{Money, PricingError};
use serde::{Deserialize, Serialize};

/// How an option group is charged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionPricing {
    /// Included in the tier price at no extra cost
    Bundled,
    /// Charged on top of the tier price
    AddOn {
        #[serde(rename = "monthlyPrice")]
        monthly_price: Money,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
    /// Service identifiers in the group
    #[serde(default)]
    pub services: Vec<String>,
    pub pricing: OptionPricing,
}

impl OptionGroup {
    pub fn add_on_price(&self) -> Option<&Money> {
        match &self.pricing {
            OptionPricing::AddOn { monthly_price } => Some(monthly_price),
            OptionPricing::Bundled => None,
        }
    }
}

/// Sum of add-on monthly prices; bundled groups contribute nothing
///
/// All add-ons must be priced in `currency`.
pub fn add_on_monthly_total(groups: &[OptionGroup], currency: &str) -> Result<Money, PricingError> {
    groups
        .iter()
        .filter_map(OptionGroup::add_on_price)
        .try_fold(Money::zero(currency), |total, price| total.checked_add(price))
}
