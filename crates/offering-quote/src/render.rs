//! Plain-text rendering of a quote

use offering_pricing::pricing::format_cycle_price;
use offering_pricing::{format_money, BudgetStatus, Quote};
use std::fmt::Write;

/// Render a quote as aligned text, one block per tier
pub fn render_quote(quote: &Quote) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Currency: {}", quote.currency);
    if !quote.add_on_monthly.is_zero() {
        let _ = writeln!(out, "Add-ons: {}/mo", format_money(&quote.add_on_monthly));
    }

    for tier in &quote.tiers {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", tier.tier_name, tier.tier_id);

        if let Some(setup) = &tier.setup {
            let _ = writeln!(out, "  Setup        {}", format_money(&setup.effective_amount));
        }

        for row in &tier.rows {
            let mut line = format!(
                "  {:<12} {:>12}",
                row.label,
                format_cycle_price(&row.pricing.effective_amount, row.cycle)
            );
            if row.pricing.has_savings() {
                let _ = write!(
                    line,
                    "  save {} ({}%)",
                    format_money(&row.pricing.savings),
                    row.pricing.savings_percent
                );
            }
            if row.months > 1 {
                let _ = write!(line, "  = {}/mo", format_money(&row.effective_monthly));
            }
            if let Some(total) = quote.line(&tier.tier_id, row.cycle) {
                if total.total != row.pricing.effective_amount {
                    let _ = write!(line, "  total {}", format_money(&total.total));
                }
                match &total.budget {
                    Some(BudgetStatus::Over { excess }) => {
                        let _ = write!(line, "  OVER BUDGET by {}", format_money(excess));
                    }
                    Some(BudgetStatus::Within { .. }) | None => {}
                }
            }
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    out
}
