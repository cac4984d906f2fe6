//! Billing cycles and their fixed month counts

use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recurrence period for a subscription charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    /// Charged once (counts as a single month)
    OneTime,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl BillingCycle {
    /// All cycles in the order the catalog editor lists them
    pub const ALL: [BillingCycle; 5] = [
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::SemiAnnual,
        BillingCycle::Annual,
        BillingCycle::OneTime,
    ];

    /// Number of months covered by one charge
    #[inline]
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::OneTime => 1,
            BillingCycle::Monthly => 1,
            BillingCycle::Quarterly => 3,
            BillingCycle::SemiAnnual => 6,
            BillingCycle::Annual => 12,
        }
    }

    /// Short human label
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::OneTime => "One-Time",
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::SemiAnnual => "Semi-Annual",
            BillingCycle::Annual => "Annual",
        }
    }

    /// Suffix appended to a price ("/mo", "/yr"); empty for one-time charges
    pub fn price_suffix(&self) -> &'static str {
        match self {
            BillingCycle::OneTime => "",
            BillingCycle::Monthly => "/mo",
            BillingCycle::Quarterly => "/qtr",
            BillingCycle::SemiAnnual => "/6mo",
            BillingCycle::Annual => "/yr",
        }
    }

    /// Canonical upper-case name, as stored in documents
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::OneTime => "ONE_TIME",
            BillingCycle::Monthly => "MONTHLY",
            BillingCycle::Quarterly => "QUARTERLY",
            BillingCycle::SemiAnnual => "SEMI_ANNUAL",
            BillingCycle::Annual => "ANNUAL",
        }
    }

    #[inline]
    pub fn is_recurring(&self) -> bool {
        !matches!(self, BillingCycle::OneTime)
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingCycle {
    type Err = PricingError;

    /// Accepts `SEMI_ANNUAL`, `semi-annual`, `Semi Annual` and the like
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        BillingCycle::ALL
            .into_iter()
            .find(|cycle| cycle.as_str() == key)
            .ok_or_else(|| PricingError::invalid_enum("billing cycle", s))
    }
}
