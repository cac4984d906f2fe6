//! Effective price calculation
//!
//! ```text
//! discount   = base × min(pct, 100) / 100      (percentage)
//!            = min(value, base)                (flat)
//! effective  = max(0, base - discount)
//! savings    = base - effective
//! savings %  = round(savings / base × 100), or 0 when base is 0
//! ```
//!
//! The result is advisory display data. Billed amounts come from the
//! document state, never from here.

use offering_common::{
    DiscountRule, Money, PriceComputationResult, PricingError, MAX_PERCENTAGE_DISCOUNT,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Apply an optional discount to a base price
///
/// Fails with [`PricingError::InvalidInput`] when the base amount or the
/// discount value is negative. Discounts above 100% or above the base are
/// clamped so the effective amount bottoms out at zero.
pub fn calculate_effective_price(
    base: &Money,
    discount: Option<DiscountRule>,
) -> Result<PriceComputationResult, PricingError> {
    if base.is_negative() {
        return Err(PricingError::InvalidInput(format!(
            "base amount must not be negative, got {}",
            base.amount
        )));
    }

    let Some(rule) = discount else {
        return Ok(PriceComputationResult::undiscounted(base));
    };

    let value = rule.value();
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PricingError::InvalidInput(format!(
            "discount value must not be negative, got {value}"
        )));
    }
    if value.is_zero() {
        return Ok(PriceComputationResult::undiscounted(base));
    }

    let discount_amount = match rule {
        DiscountRule::Percentage(pct) => {
            let cap = Decimal::from(MAX_PERCENTAGE_DISCOUNT);
            if pct > cap {
                warn!(%pct, %cap, "percentage discount above cap, clamping");
            }
            let rate = pct.min(cap) / Decimal::ONE_HUNDRED;
            base.amount.checked_mul(rate).ok_or(PricingError::Overflow)?
        }
        DiscountRule::Flat(amount) => {
            if amount > base.amount {
                warn!(%amount, base = %base.amount, "flat discount exceeds base, clamping");
            }
            amount.min(base.amount)
        }
    };

    let effective = (base.amount - discount_amount).max(Decimal::ZERO);
    let savings = base.amount - effective;

    Ok(PriceComputationResult {
        effective_amount: base.with_amount(effective),
        savings: base.with_amount(savings),
        savings_percent: savings_percent(savings, base.amount),
    })
}

/// Whole-number share of `base` saved, half rounded up
///
/// Divides before scaling: `savings <= base`, so the ratio stays in 0..=1
/// and the `× 100` cannot overflow for bases near `Decimal::MAX`.
fn savings_percent(savings: Decimal, base: Decimal) -> u32 {
    if base.is_zero() {
        return 0;
    }
    savings
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|pct| pct.to_u32())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_discount() {
        let base = Money::usd(dec!(120));
        let result = calculate_effective_price(&base, None).unwrap();
        assert_eq!(result.effective_amount, base);
        assert_eq!(result.savings, Money::usd(Decimal::ZERO));
        assert_eq!(result.savings_percent, 0);
    }

    #[test]
    fn test_zero_value_discount() {
        let base = Money::usd(dec!(120));
        let result =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(Decimal::ZERO)))
                .unwrap();
        assert_eq!(result, PriceComputationResult::undiscounted(&base));
    }

    #[test]
    fn test_percentage_discount() {
        let base = Money::usd(dec!(200));
        let result =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(dec!(15)))).unwrap();
        assert_eq!(result.effective_amount, Money::usd(dec!(170)));
        assert_eq!(result.savings, Money::usd(dec!(30)));
        assert_eq!(result.savings_percent, 15);
    }

    #[test]
    fn test_percentage_above_hundred_clamps() {
        let base = Money::usd(dec!(80));
        let result =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(dec!(150)))).unwrap();
        assert_eq!(result.effective_amount, Money::usd(Decimal::ZERO));
        assert_eq!(result.savings, base);
        assert_eq!(result.savings_percent, 100);
    }

    #[test]
    fn test_flat_discount() {
        let base = Money::usd(dec!(99.99));
        let result = calculate_effective_price(&base, Some(DiscountRule::Flat(dec!(10)))).unwrap();
        assert_eq!(result.effective_amount, Money::usd(dec!(89.99)));
        assert_eq!(result.savings, Money::usd(dec!(10)));
        // 10 / 99.99 = 10.001%
        assert_eq!(result.savings_percent, 10);
    }

    #[test]
    fn test_flat_above_base_clamps() {
        let base = Money::usd(dec!(50));
        let result = calculate_effective_price(&base, Some(DiscountRule::Flat(dec!(75)))).unwrap();
        assert_eq!(result.effective_amount, Money::usd(Decimal::ZERO));
        assert_eq!(result.savings, Money::usd(dec!(50)));
        assert_eq!(result.savings_percent, 100);
    }

    #[test]
    fn test_zero_base() {
        let base = Money::new(Decimal::ZERO, "EUR");
        let result = calculate_effective_price(&base, Some(DiscountRule::Flat(dec!(5)))).unwrap();
        assert_eq!(result.effective_amount, Money::zero("EUR"));
        assert_eq!(result.savings, Money::zero("EUR"));
        assert_eq!(result.savings_percent, 0);
    }

    #[test]
    fn test_savings_percent_rounds_half_up() {
        // 1 / 8 = 12.5%
        let base = Money::usd(dec!(8));
        let result = calculate_effective_price(&base, Some(DiscountRule::Flat(dec!(1)))).unwrap();
        assert_eq!(result.savings_percent, 13);
    }

    #[test]
    fn test_clamp_uses_max_percentage_discount() {
        let base = Money::usd(dec!(30));
        let at_cap = Decimal::from(MAX_PERCENTAGE_DISCOUNT);
        let capped =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(at_cap))).unwrap();
        let above =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(at_cap + dec!(0.01))))
                .unwrap();
        assert_eq!(above, capped);
        assert_eq!(capped.savings_percent, MAX_PERCENTAGE_DISCOUNT);
    }

    #[test]
    fn test_savings_percent_on_huge_base() {
        // base × 100 would not fit in a Decimal
        let base = Money::usd(Decimal::from_i128_with_scale(10i128.pow(27), 0));
        let full = calculate_effective_price(&base, Some(DiscountRule::Flat(base.amount))).unwrap();
        assert_eq!(full.effective_amount, Money::usd(Decimal::ZERO));
        assert_eq!(full.savings_percent, 100);

        let half =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(dec!(50)))).unwrap();
        assert_eq!(half.savings_percent, 50);
    }

    #[test]
    fn test_currency_carried_through() {
        let base = Money::new(dec!(40), "EUR");
        let result =
            calculate_effective_price(&base, Some(DiscountRule::Percentage(dec!(25)))).unwrap();
        assert_eq!(result.effective_amount, Money::new(dec!(30), "EUR"));
        assert_eq!(result.savings.currency, "EUR");
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let negative_base = Money::usd(dec!(-1));
        assert!(matches!(
            calculate_effective_price(&negative_base, None),
            Err(PricingError::InvalidInput(_))
        ));

        let base = Money::usd(dec!(10));
        assert!(matches!(
            calculate_effective_price(&base, Some(DiscountRule::Flat(dec!(-2)))),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_effective_price(&base, Some(DiscountRule::Percentage(dec!(-0.5)))),
            Err(PricingError::InvalidInput(_))
        ));
    }
}
