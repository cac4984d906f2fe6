//! Quote configuration

use offering_common::{normalize_currency, OfferingError, Result, DEFAULT_CURRENCY};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable naming the fallback quote currency
///
/// Only used when the catalog names no currency of its own. Prices in the
/// catalog are not retagged: a price without a `currency` field is USD, so
/// setting this to anything else requires every price to name that currency.
pub const ENV_DEFAULT_CURRENCY: &str = "OFFERING_DEFAULT_CURRENCY";
/// Environment variable holding an optional budget
pub const ENV_BUDGET: &str = "OFFERING_BUDGET";
/// Environment variable naming the catalog file
pub const ENV_CATALOG: &str = "OFFERING_CATALOG";

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteConfig {
    /// Used when the catalog has no top-level currency
    pub default_currency: String,
    /// Each quote line is compared against this, when set
    pub budget: Option<Decimal>,
    /// Catalog used when none is passed on the command line
    pub catalog_path: Option<PathBuf>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            budget: None,
            catalog_path: None,
        }
    }
}

impl QuoteConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(currency) = lookup(ENV_DEFAULT_CURRENCY) {
            cfg.default_currency = normalize_currency(&currency);
        }

        if let Some(raw) = lookup(ENV_BUDGET).filter(|v| !v.trim().is_empty()) {
            let budget = Decimal::from_str(raw.trim()).map_err(|e| {
                OfferingError::Config(format!("{ENV_BUDGET}={raw:?} is not a decimal: {e}"))
            })?;
            if budget.is_sign_negative() && !budget.is_zero() {
                return Err(OfferingError::Config(format!(
                    "{ENV_BUDGET} must not be negative, got {budget}"
                )));
            }
            cfg.budget = Some(budget);
        }

        if let Some(path) = lookup(ENV_CATALOG).filter(|v| !v.trim().is_empty()) {
            cfg.catalog_path = Some(PathBuf::from(path));
        }

        Ok(cfg)
    }
}
