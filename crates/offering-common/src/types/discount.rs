//! Discount rules and price computation results
//!
//! A discount is either a percentage of the base price (0-100, larger values
//! are clamped when applied) or a flat amount in the base price's currency.
//! String input from forms is validated here, before any arithmetic runs.

use super::money::Money;
use crate::error::PricingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of reduction a discount applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Flat,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "PERCENTAGE",
            DiscountType::Flat => "FLAT",
        }
    }
}

impl FromStr for DiscountType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PERCENTAGE" => Ok(DiscountType::Percentage),
            "FLAT" => Ok(DiscountType::Flat),
            _ => Err(PricingError::invalid_enum("discount type", s)),
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reduction applied to a base price
///
/// Serialized as `{"discountType": "PERCENTAGE", "discountValue": "15"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "discountType",
    content = "discountValue",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum DiscountRule {
    /// Percent of the base amount (0-100)
    Percentage(Decimal),
    /// Fixed amount subtracted from the base
    Flat(Decimal),
}

impl DiscountRule {
    pub fn new(kind: DiscountType, value: Decimal) -> Self {
        match kind {
            DiscountType::Percentage => DiscountRule::Percentage(value),
            DiscountType::Flat => DiscountRule::Flat(value),
        }
    }

    /// Build a rule from raw form fields
    ///
    /// A blank value means "no discount" and yields `Ok(None)`. Percentage
    /// values may carry a trailing `%`.
    pub fn parse(kind: &str, value: &str) -> Result<Option<Self>, PricingError> {
        let kind: DiscountType = kind.parse()?;

        let mut raw = value.trim();
        if kind == DiscountType::Percentage {
            raw = raw.strip_suffix('%').unwrap_or(raw).trim_end();
        }
        if raw.is_empty() {
            return Ok(None);
        }

        let value = Decimal::from_str(raw).map_err(|_| {
            PricingError::InvalidInput(format!("discount value {value:?} is not a number"))
        })?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PricingError::InvalidInput(format!(
                "discount value must not be negative, got {value}"
            )));
        }

        Ok(Some(DiscountRule::new(kind, value)))
    }

    pub fn kind(&self) -> DiscountType {
        match self {
            DiscountRule::Percentage(_) => DiscountType::Percentage,
            DiscountRule::Flat(_) => DiscountType::Flat,
        }
    }

    pub fn value(&self) -> Decimal {
        match self {
            DiscountRule::Percentage(v) | DiscountRule::Flat(v) => *v,
        }
    }
}

/// Post-discount price, savings and savings percentage
///
/// Derived on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComputationResult {
    /// Amount actually charged
    pub effective_amount: Money,
    /// Base minus effective amount
    pub savings: Money,
    /// Savings relative to base, rounded to the nearest whole percent
    pub savings_percent: u32,
}

impl PriceComputationResult {
    /// Result for an undiscounted price
    pub fn undiscounted(base: &Money) -> Self {
        Self {
            effective_amount: base.clone(),
            savings: Money::zero(&base.currency),
            savings_percent: 0,
        }
    }

    #[inline]
    pub fn has_savings(&self) -> bool {
        self.savings.amount > Decimal::ZERO
    }
}
