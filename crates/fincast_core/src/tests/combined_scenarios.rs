//! Composition of multiple active scenarios
//!
//! Scenario effects are independent per-day adjustments, so the headline
//! differences must compose additively: monthly boosts and recurring costs
//! net out, one-off purchases subtract exactly once.

use jiff::ToSpan;
use jiff::civil::date;

use crate::model::Scenario;
use crate::run_simulation;
use crate::tests::fixtures::account;

#[test]
fn test_monthly_and_one_off_effects_compose() {
    // Start 2025-03-10 (not the 1st): monthly amounts fire on the first
    // projected day plus every 1st -- 7 times by index 180, 13 times by
    // index 365. The purchase lands at index 100.
    let today = date(2025, 3, 10);
    let scenarios = vec![
        Scenario::IncomeBoost {
            amount: 300.0,
            active: true,
        },
        Scenario::RecurringExpense {
            amount: 100.0,
            active: true,
        },
        Scenario::BigPurchase {
            amount: 500.0,
            date: today.saturating_add(100.days()),
            active: true,
        },
    ];

    let outcome = run_simulation(&[], &[account(1, 10_000.0, true)], &[], &[], &scenarios, today);

    assert_eq!(outcome.difference_6_months, 200.0 * 7.0 - 500.0);
    assert_eq!(outcome.difference_12_months, 200.0 * 13.0 - 500.0);

    // The one-off is visible as a step exactly at its index.
    let delta_at = |i: usize| outcome.simulated[i].balance - outcome.baseline[i].balance;
    assert_eq!(delta_at(99) - delta_at(100), 500.0);
}

#[test]
fn test_offsetting_monthly_scenarios_are_neutral() {
    let today = date(2025, 3, 10);
    let scenarios = vec![
        Scenario::IncomeBoost {
            amount: 250.0,
            active: true,
        },
        Scenario::RecurringExpense {
            amount: 250.0,
            active: true,
        },
    ];

    let outcome = run_simulation(&[], &[account(1, 10_000.0, true)], &[], &[], &scenarios, today);

    assert_eq!(outcome.difference_12_months, 0.0);
    assert_eq!(outcome.verdict, crate::model::Verdict::Neutral);
}
