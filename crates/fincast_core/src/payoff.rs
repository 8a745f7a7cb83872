//! Debt payoff amortization
//!
//! Month-by-month simulation of a debt portfolio under a fixed priority
//! order. Minimum payments accrue and pay interest first; freed-up minimums
//! from retired debts roll over into the extra-payment pool the following
//! month; the pool pays principal directly on the highest-priority surviving
//! debt and cascades down within the month. When a minimum payment does not
//! cover accrued interest the shortfall grows the balance: real
//! negative-amortization behavior, deliberately not capped at zero.

use std::cmp::Ordering;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::model::{AmortizationEntry, Debt, PayoffProjection, PayoffStrategy};

/// Hard ceiling on the simulation: 30 years. Portfolios still carrying a
/// balance at the cap are returned as-is, flagged by
/// `months_to_payoff == MAX_PAYOFF_MONTHS`, never raised as an error.
pub const MAX_PAYOFF_MONTHS: u32 = 360;

/// Working copy of one debt during the simulation.
struct DebtState {
    balance: f64,
    interest_rate: f64,
    minimum_payment: f64,
    /// Whether this debt's minimum has already joined the rollover pool.
    rolled_over: bool,
}

fn total_balance(debts: &[DebtState]) -> f64 {
    debts.iter().map(|d| d.balance).sum()
}

/// Simulate paying off `debts` with `extra_payment` per month on top of the
/// minimums, prioritized by `strategy`.
///
/// The inputs are cloned into working state; the caller's list is never
/// mutated. Priority is a stable sort computed once from the initial list
/// and is not re-evaluated as balances change; callers wanting dynamic
/// re-prioritization re-invoke with the surviving debts.
#[must_use]
pub fn calculate_payoff(
    debts: &[Debt],
    extra_payment: f64,
    strategy: PayoffStrategy,
    today: Date,
) -> PayoffProjection {
    let mut sim: Vec<DebtState> = debts
        .iter()
        .map(|d| DebtState {
            balance: d.current_balance,
            interest_rate: d.interest_rate,
            minimum_payment: d.minimum_payment,
            rolled_over: false,
        })
        .collect();

    match strategy {
        PayoffStrategy::Avalanche => sim.sort_by(|a, b| {
            b.interest_rate
                .partial_cmp(&a.interest_rate)
                .unwrap_or(Ordering::Equal)
        }),
        PayoffStrategy::Snowball => sim.sort_by(|a, b| {
            a.balance
                .partial_cmp(&b.balance)
                .unwrap_or(Ordering::Equal)
        }),
    }

    let mut schedule = Vec::new();
    let mut total_interest_paid = 0.0;
    let mut rollover = 0.0;
    let mut months = 0u32;

    while months < MAX_PAYOFF_MONTHS && total_balance(&sim) > 0.0 {
        months += 1;
        let mut interest_paid = 0.0;
        let mut principal_paid = 0.0;

        // Minimum payments, interest first.
        for debt in sim.iter_mut().filter(|d| d.balance > 0.0) {
            let interest = debt.balance * debt.interest_rate / 100.0 / 12.0;
            let payment = debt.minimum_payment.min(debt.balance + interest);
            // Uniform update: covers payoff, normal paydown, and the
            // negative-amortization case where unpaid interest capitalizes.
            debt.balance = debt.balance + interest - payment;
            interest_paid += payment.min(interest);
            principal_paid += (payment - interest).max(0.0);
        }

        // Extra pool: configured extra plus minimums freed in earlier
        // months, applied straight to principal down the priority order.
        let mut pool = extra_payment + rollover;
        for debt in &mut sim {
            if pool <= 0.0 {
                break;
            }
            if debt.balance <= 0.0 {
                continue;
            }
            let applied = pool.min(debt.balance);
            debt.balance -= applied;
            principal_paid += applied;
            pool -= applied;
        }

        // Debts retired by this month free their minimum from next month on.
        for debt in sim.iter_mut().filter(|d| d.balance <= 0.0 && !d.rolled_over) {
            rollover += debt.minimum_payment;
            debt.rolled_over = true;
        }

        total_interest_paid += interest_paid;
        schedule.push(AmortizationEntry {
            month: months,
            total_balance: total_balance(&sim),
            interest_paid,
            principal_paid,
        });
    }

    PayoffProjection {
        debt_free_date: today.saturating_add((months as i64).months()),
        total_interest_paid,
        months_to_payoff: months,
        schedule,
    }
}
