//! Price formatting
//!
//! Fixed rules, no locale detection: two decimal places, no grouping
//! separators, the currency symbol when one is known and the raw code
//! followed by a space otherwise.

use offering_common::{
    normalize_currency, BillingCycle, Money, DEFAULT_CURRENCY, DISPLAY_DECIMAL_PLACES,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Conventional symbol for a normalised currency code
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Format an amount, e.g. `$1234.50` or `EUR 10.00`
///
/// `None` means USD. Negative amounts keep a leading minus sign in front of
/// the symbol or code.
pub fn format_price(amount: Decimal, currency: Option<&str>) -> String {
    let code = normalize_currency(currency.unwrap_or(DEFAULT_CURRENCY));
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.*}", DISPLAY_DECIMAL_PLACES as usize, rounded.abs());

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code} {digits}"),
    }
}

pub fn format_money(money: &Money) -> String {
    format_price(money.amount, Some(&money.currency))
}

/// Format a per-cycle price with its suffix, e.g. `$29.99/mo`
pub fn format_cycle_price(money: &Money, cycle: BillingCycle) -> String {
    format!("{}{}", format_money(money), cycle.price_suffix())
}
