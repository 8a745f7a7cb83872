//! Debt records and payoff strategy selection

use serde::{Deserialize, Serialize};

/// A single debt in the payoff portfolio.
///
/// The payoff engine clones debts before simulating, so the caller's list is
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    /// Outstanding principal, must be positive.
    pub current_balance: f64,
    /// Annual percentage rate, e.g. `12.0` for 12%/yr.
    pub interest_rate: f64,
    pub minimum_payment: f64,
    /// Day-of-month the payment is due. Bookkeeping only; the amortization
    /// math works in whole months.
    pub due_day: i8,
}

/// Which debt gets priority for extra payments and rollover.
///
/// Priority is computed once from the initial debt list with a stable sort
/// and is not re-evaluated as balances change during the simulation. For
/// Avalanche the rate-based order never changes anyway; for Snowball a
/// mid-simulation re-sort could reorder debts, and callers relying on that
/// must re-invoke the engine with the surviving debts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffStrategy {
    /// Highest interest rate first, mathematically optimal.
    Avalanche,
    /// Smallest balance first, clears debts sooner for motivation.
    Snowball,
}
