//! Money - an amount paired with an ISO 4217-like currency code
//!
//! Currency codes are stored trimmed and upper-cased. An omitted or blank
//! code means USD.

use crate::error::PricingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency assumed when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

/// Normalise a currency code, falling back to [`DEFAULT_CURRENCY`]
pub fn normalize_currency(code: &str) -> String {
    let code = code.trim();
    if code.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        code.to_ascii_uppercase()
    }
}

/// Monetary amount in a single currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MoneyRepr")]
pub struct Money {
    /// Amount in major units (e.g. dollars, not cents)
    pub amount: Decimal,
    /// Upper-case currency code
    pub currency: String,
}

/// Wire shape accepted on input; the currency may be omitted
#[derive(Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    #[serde(default)]
    currency: Option<String>,
}

impl From<MoneyRepr> for Money {
    fn from(repr: MoneyRepr) -> Self {
        Money::new(repr.amount, repr.currency.as_deref().unwrap_or(DEFAULT_CURRENCY))
    }
}

impl Money {
    pub fn new(amount: Decimal, currency: impl AsRef<str>) -> Self {
        Self {
            amount,
            currency: normalize_currency(currency.as_ref()),
        }
    }

    /// Amount in US dollars
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    /// Zero in the given currency
    pub fn zero(currency: impl AsRef<str>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Same currency, different amount
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self {
            amount,
            currency: self.currency.clone(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Add two amounts of the same currency
    pub fn checked_add(&self, other: &Money) -> Result<Money, PricingError> {
        if self.currency != other.currency {
            return Err(PricingError::CurrencyMismatch {
                expected: self.currency.clone(),
                actual: other.currency.clone(),
            });
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(PricingError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Multiply the amount by a scalar factor
    pub fn checked_mul(&self, factor: Decimal) -> Result<Money, PricingError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(PricingError::Overflow)?;
        Ok(self.with_amount(amount))
    }
}
