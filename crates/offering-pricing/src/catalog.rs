//! Catalog documents and quotes
//!
//! A catalog is the pricing slice of a service-offering document: tiers,
//! the billing cycles offered and the option groups. Quoting a catalog
//! prices every tier for every cycle and adds the monthly add-on total for
//! the months each cycle covers.

use crate::pricing::{
    add_on_monthly_total, build_breakdown, compare_to_budget, BudgetStatus, OptionGroup, Tier,
    TierBreakdown,
};
use offering_common::{normalize_currency, BillingCycle, Money, PricingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Currency every price in the catalog is expressed in
    #[serde(default)]
    pub currency: Option<String>,
    /// Cycles offered; empty means all of them
    #[serde(default)]
    pub cycles: Vec<BillingCycle>,
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub option_groups: Vec<OptionGroup>,
}

/// Total for one tier and cycle, add-ons included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub tier_id: String,
    pub cycle: BillingCycle,
    pub total: Money,
    pub budget: Option<BudgetStatus>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub currency: String,
    pub tiers: Vec<TierBreakdown>,
    pub add_on_monthly: Money,
    pub lines: Vec<QuoteLine>,
}

impl Quote {
    pub fn line(&self, tier_id: &str, cycle: BillingCycle) -> Option<&QuoteLine> {
        self.lines
            .iter()
            .find(|l| l.tier_id == tier_id && l.cycle == cycle)
    }

    /// Lines whose total exceeds the budget
    pub fn over_budget(&self) -> impl Iterator<Item = &QuoteLine> {
        self.lines
            .iter()
            .filter(|l| matches!(l.budget, Some(BudgetStatus::Over { .. })))
    }
}

impl Catalog {
    /// Parse a catalog from JSON
    pub fn from_json(input: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(input)?;
        debug!(
            tiers = catalog.tiers.len(),
            option_groups = catalog.option_groups.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Read and parse a catalog file
    ///
    /// Read failures surface as `OfferingError::Storage`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = input.len(), "read catalog file");
        Self::from_json(&input)
    }

    /// Catalog currency, or `fallback` when the document names none
    pub fn currency_or(&self, fallback: &str) -> String {
        normalize_currency(self.currency.as_deref().unwrap_or(fallback))
    }

    /// Offered cycles in document order without duplicates
    pub fn cycles(&self) -> Vec<BillingCycle> {
        if self.cycles.is_empty() {
            return BillingCycle::ALL.to_vec();
        }
        let mut seen = HashSet::new();
        self.cycles
            .iter()
            .copied()
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Check ids are unique and every price is non-negative and in `currency`
    pub fn validate(&self, currency: &str) -> std::result::Result<(), PricingError> {
        let mut ids = HashSet::new();
        for tier in &self.tiers {
            if !ids.insert(tier.id.as_str()) {
                return Err(PricingError::InvalidInput(format!(
                    "duplicate tier id {:?}",
                    tier.id
                )));
            }
            check_price(&tier.monthly_price, currency, &tier.id)?;
            match (&tier.setup_fee, &tier.setup_discount) {
                (Some(fee), _) => check_price(fee, currency, &tier.id)?,
                (None, Some(_)) => {
                    return Err(PricingError::InvalidInput(format!(
                        "{}: setupDiscount given without a setupFee",
                        tier.id
                    )));
                }
                (None, None) => {}
            }
        }
        for group in &self.option_groups {
            if let Some(price) = group.add_on_price() {
                check_price(price, currency, &group.id)?;
            }
        }
        Ok(())
    }

    /// Price every tier for every offered cycle
    ///
    /// `budget` is compared against each line total, in the catalog currency.
    #[instrument(skip(self), fields(tiers = self.tiers.len()))]
    pub fn quote(
        &self,
        default_currency: &str,
        budget: Option<Decimal>,
    ) -> std::result::Result<Quote, PricingError> {
        let currency = self.currency_or(default_currency);
        self.validate(&currency)?;

        let cycles = self.cycles();
        let tiers = build_breakdown(&self.tiers, &cycles)?;
        let add_on_monthly = add_on_monthly_total(&self.option_groups, &currency)?;
        let budget = budget.map(|amount| Money::new(amount, &currency));

        let mut lines = Vec::with_capacity(tiers.len() * cycles.len());
        for tier in &tiers {
            for row in &tier.rows {
                let add_ons = add_on_monthly.checked_mul(Decimal::from(row.months))?;
                let total = row.pricing.effective_amount.checked_add(&add_ons)?;
                let status = budget
                    .as_ref()
                    .map(|b| compare_to_budget(&total, b))
                    .transpose()?;
                lines.push(QuoteLine {
                    tier_id: tier.tier_id.clone(),
                    cycle: row.cycle,
                    total,
                    budget: status,
                });
            }
        }

        info!(
            currency = %currency,
            lines = lines.len(),
            over_budget = lines
                .iter()
                .filter(|l| matches!(l.budget, Some(BudgetStatus::Over { .. })))
                .count(),
            "quote computed"
        );

        Ok(Quote {
            currency,
            tiers,
            add_on_monthly,
            lines,
        })
    }
}

fn check_price(price: &Money, currency: &str, owner: &str) -> std::result::Result<(), PricingError> {
    if price.currency != currency {
        return Err(PricingError::CurrencyMismatch {
            expected: currency.to_string(),
            actual: price.currency.clone(),
        });
    }
    if price.is_negative() {
        return Err(PricingError::InvalidInput(format!(
            "{owner}: price must not be negative, got {}",
            price.amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::OptionPricing;
    use offering_common::{DiscountRule, OfferingError};
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog {
            currency: None,
            cycles: vec![BillingCycle::Monthly, BillingCycle::Annual, BillingCycle::Monthly],
            tiers: vec![Tier::new("basic", "Basic", Money::usd(dec!(10)))
                .with_cycle_discount(BillingCycle::Annual, DiscountRule::Percentage(dec!(10)))],
            option_groups: vec![OptionGroup {
                id: "support".to_string(),
                name: "Support".to_string(),
                display_order: 0,
                services: vec![],
                pricing: OptionPricing::AddOn {
                    monthly_price: Money::usd(dec!(5)),
                },
            }],
        }
    }

    #[test]
    fn test_cycles_deduplicated() {
        assert_eq!(
            catalog().cycles(),
            vec![BillingCycle::Monthly, BillingCycle::Annual]
        );

        let mut all = catalog();
        all.cycles.clear();
        assert_eq!(all.cycles().len(), 5);
    }

    #[test]
    fn test_quote_adds_add_ons_per_month() {
        let quote = catalog().quote("USD", None).unwrap();
        assert_eq!(quote.add_on_monthly, Money::usd(dec!(5)));

        // 10 + 5
        let monthly = quote.line("basic", BillingCycle::Monthly).unwrap();
        assert_eq!(monthly.total, Money::usd(dec!(15)));
        assert_eq!(monthly.budget, None);

        // 120 - 10% + 12 × 5
        let annual = quote.line("basic", BillingCycle::Annual).unwrap();
        assert_eq!(annual.total, Money::usd(dec!(168)));
    }

    #[test]
    fn test_quote_budget() {
        let quote = catalog().quote("USD", Some(dec!(100))).unwrap();
        let over: Vec<_> = quote.over_budget().map(|l| l.cycle).collect();
        assert_eq!(over, vec![BillingCycle::Annual]);
        assert!(quote
            .line("basic", BillingCycle::Monthly)
            .and_then(|l| l.budget.as_ref())
            .is_some_and(BudgetStatus::is_within));
    }

    #[test]
    fn test_catalog_currency_overrides_default() {
        let mut eur = catalog();
        eur.currency = Some("eur".to_string());
        assert_eq!(eur.currency_or("USD"), "EUR");
        assert!(matches!(
            eur.quote("USD", None),
            Err(PricingError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_tier_ids_rejected() {
        let mut dup = catalog();
        dup.tiers.push(Tier::new("basic", "Basic Again", Money::usd(dec!(12))));
        assert!(matches!(dup.validate("USD"), Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_setup_discount_requires_setup_fee() {
        let mut orphan = catalog();
        orphan.tiers[0].setup_discount = Some(DiscountRule::Percentage(dec!(50)));
        assert!(matches!(
            orphan.quote("USD", None),
            Err(PricingError::InvalidInput(msg)) if msg.contains("setupDiscount")
        ));

        orphan.tiers[0].setup_fee = Some(Money::usd(dec!(40)));
        let quote = orphan.quote("USD", None).unwrap();
        assert_eq!(
            quote.tiers[0].setup.as_ref().map(|s| &s.effective_amount),
            Some(&Money::usd(dec!(20)))
        );
    }

    #[test]
    fn test_default_currency_does_not_retag_prices() {
        // Prices without a currency are USD, whatever the quote default is
        let json = r#"{
            "cycles": ["MONTHLY"],
            "tiers": [{"id": "basic", "name": "Basic", "monthlyPrice": {"amount": 10}}]
        }"#;
        let untagged = Catalog::from_json(json).unwrap();
        assert_eq!(
            untagged.quote("EUR", None).unwrap_err(),
            PricingError::CurrencyMismatch {
                expected: "EUR".to_string(),
                actual: "USD".to_string(),
            }
        );

        let tagged = Catalog::from_json(&json.replace(r#""amount": 10"#, r#""amount": 10, "currency": "EUR""#))
            .unwrap();
        let quote = tagged.quote("EUR", None).unwrap();
        assert_eq!(quote.currency, "EUR");
        assert_eq!(
            quote.line("basic", BillingCycle::Monthly).map(|l| &l.total),
            Some(&Money::new(dec!(10), "EUR"))
        );
    }

    #[test]
    fn test_from_path() {
        let missing = std::env::temp_dir().join("offering-pricing-no-such-catalog.json");
        assert!(matches!(
            Catalog::from_path(&missing),
            Err(OfferingError::Storage(_))
        ));

        let path = std::env::temp_dir().join(format!(
            "offering-pricing-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"tiers": []}"#).unwrap();
        let loaded = Catalog::from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(loaded.unwrap().tiers.is_empty());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Catalog::from_json("{\"tiers\": 3}"),
            Err(OfferingError::Serialization(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"tiers": [], "cycles": ["WEEKLY"]}"#),
            Err(OfferingError::Serialization(_))
        ));
    }
}
