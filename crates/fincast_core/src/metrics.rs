//! Liquidity metrics: burn rate, net worth, runway, and risk classification
//!
//! Pure aggregates over transaction and account lists. Division-by-zero
//! cases resolve to zero or to the finite [`RUNWAY_UNBOUNDED`] sentinel,
//! never NaN or infinity, since these numbers feed dashboards directly.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::model::{
    Account, RiskAnalysis, RiskLevel, Transaction, TransactionKind, total_liquidity,
};

/// Categories excluded from the variable-spending average. Housing and
/// investment-like outflows are large, fixed, and would distort the burn
/// rate that the forecast uses for day-to-day spending. Matched exactly and
/// case-sensitively, like every other category join.
pub const EXCLUDED_CATEGORIES: [&str; 5] =
    ["Housing", "Rent", "Mortgage", "Investments", "Savings"];

/// Runway sentinel for a zero or negative burn rate: effectively infinite,
/// but finite so it composes with comparisons and UI formatting.
pub const RUNWAY_UNBOUNDED: i64 = 999;

fn in_window(date: Date, today: Date, window_days: u32) -> bool {
    date <= today && date > today.saturating_sub((window_days as i64).days())
}

/// Average daily variable-expense rate over the trailing window.
///
/// Considers expenses only, skips transfers and the fixed
/// [`EXCLUDED_CATEGORIES`], and divides by `window_days`: zero-spend days
/// count as zero, the denominator never shrinks to the days that had
/// transactions. Returns `0.0` when nothing matches or the window is empty.
#[must_use]
pub fn burn_rate(transactions: &[Transaction], today: Date, window_days: u32) -> f64 {
    if window_days == 0 {
        return 0.0;
    }

    let total: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .filter(|t| !t.is_transfer)
        .filter(|t| !EXCLUDED_CATEGORIES.contains(&t.category.as_str()))
        .filter(|t| in_window(t.date, today, window_days))
        .map(|t| t.amount)
        .sum();

    total / f64::from(window_days)
}

/// Average daily expense rate for a single category over the trailing
/// window. No exclusion-set filtering here: the caller names the category
/// explicitly, so excluded ones are fair game.
#[must_use]
pub fn category_burn_rate(
    transactions: &[Transaction],
    category: &str,
    today: Date,
    window_days: u32,
) -> f64 {
    if window_days == 0 {
        return 0.0;
    }

    let total: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .filter(|t| !t.is_transfer)
        .filter(|t| t.category == category)
        .filter(|t| in_window(t.date, today, window_days))
        .map(|t| t.amount)
        .sum();

    total / f64::from(window_days)
}

/// Net worth: enabled account balances plus external assets minus
/// liabilities. Single reporting currency, no conversion.
#[must_use]
pub fn net_worth(accounts: &[Account], assets_value: f64, liabilities_value: f64) -> f64 {
    total_liquidity(accounts) + assets_value - liabilities_value
}

/// Days of liquidity left at the given daily burn, floored.
///
/// A burn of zero or less yields [`RUNWAY_UNBOUNDED`]; negative liquidity
/// yields 0 rather than a negative day count.
#[must_use]
pub fn runway_days(liquidity: f64, daily_burn: f64) -> i64 {
    if daily_burn <= 0.0 {
        return RUNWAY_UNBOUNDED;
    }
    let days = (liquidity / daily_burn).floor();
    if days <= 0.0 { 0 } else { days as i64 }
}

/// Classify liquidity risk from a 30-day burn window plus fixed monthly
/// costs. Pure read with no side effects, safe to call on every render or
/// poll tick.
#[must_use]
pub fn analyze_risk(
    transactions: &[Transaction],
    accounts: &[Account],
    fixed_monthly_cost: f64,
    today: Date,
) -> RiskAnalysis {
    let daily_burn = burn_rate(transactions, today, 30) + fixed_monthly_cost / 30.0;
    let liquidity = total_liquidity(accounts);
    let days_until_empty = runway_days(liquidity, daily_burn);

    let risk_level = if days_until_empty < 30 {
        RiskLevel::High
    } else if days_until_empty < 90 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskAnalysis {
        risk_level,
        daily_burn,
        days_until_empty,
        projected_balance: liquidity - daily_burn * 30.0,
    }
}
