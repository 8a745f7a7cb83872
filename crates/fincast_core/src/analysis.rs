//! Derived read-models for the dashboard layer

use jiff::ToSpan;
use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::model::{CategorySpending, Transaction, TransactionKind};

/// Aggregate variable spending by category over the trailing window.
///
/// Expenses only, transfers excluded; `share` is each category's fraction of
/// the window's total (shares sum to 1 when anything matched). Sorted by
/// total, largest first, with the category name as tiebreaker so equal
/// totals render in a stable order.
#[must_use]
pub fn spending_by_category(
    transactions: &[Transaction],
    today: Date,
    window_days: u32,
) -> Vec<CategorySpending> {
    let window_start = today.saturating_sub((window_days as i64).days());
    let mut totals: FxHashMap<&str, f64> = FxHashMap::default();

    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .filter(|t| !t.is_transfer)
        .filter(|t| t.date <= today && t.date > window_start)
    {
        *totals.entry(t.category.as_str()).or_insert(0.0) += t.amount;
    }

    let grand_total: f64 = totals.values().sum();
    let mut breakdown: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, total)| CategorySpending {
            category: category.to_string(),
            total,
            share: if grand_total > 0.0 {
                total / grand_total
            } else {
                0.0
            },
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}
