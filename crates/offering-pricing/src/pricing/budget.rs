//! Budget vs. total comparison

use super::format::format_money;
use offering_common::{Money, PricingError};
use serde::Serialize;

/// Where a total lands relative to a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    /// Total is at or below the budget
    Within { headroom: Money },
    /// Total is above the budget
    Over { excess: Money },
}

impl BudgetStatus {
    #[inline]
    pub fn is_within(&self) -> bool {
        matches!(self, BudgetStatus::Within { .. })
    }
}

/// Compare a total against a budget in the same currency
pub fn compare_to_budget(total: &Money, budget: &Money) -> Result<BudgetStatus, PricingError> {
    if total.currency != budget.currency {
        return Err(PricingError::CurrencyMismatch {
            expected: budget.currency.clone(),
            actual: total.currency.clone(),
        });
    }

    Ok(if total.amount <= budget.amount {
        BudgetStatus::Within {
            headroom: budget.with_amount(budget.amount - total.amount),
        }
    } else {
        BudgetStatus::Over {
            excess: budget.with_amount(total.amount - budget.amount),
        }
    })
}

/// Like [`compare_to_budget`], but an overrun is an error
///
/// Returns the remaining headroom on success.
pub fn ensure_within_budget(total: &Money, budget: &Money) -> Result<Money, PricingError> {
    match compare_to_budget(total, budget)? {
        BudgetStatus::Within { headroom } => Ok(headroom),
        BudgetStatus::Over { .. } => Err(PricingError::BudgetExceeded {
            price: format_money(total),
            budget: format_money(budget),
        }),
    }
}
