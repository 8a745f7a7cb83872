//! Ledger input records
//!
//! These are the read-only inputs supplied by the surrounding application:
//! transaction history, account snapshots, and the fixed/recurring monthly
//! obligations. The engines never mutate them. Direction of money movement
//! is carried by [`TransactionKind`], never by the sign of `amount`; stored
//! amounts are always non-negative.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, TransactionId};

/// Whether a transaction (or recurring obligation) moves money in or out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single historical transaction.
///
/// Transfers between own accounts carry `is_transfer: true` and are excluded
/// from burn-rate and income/expense aggregation so internal money movement
/// is not double-counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    /// Always non-negative; direction comes from `kind`.
    pub amount: f64,
    pub date: Date,
    pub category: String,
    pub kind: TransactionKind,
    pub account_id: AccountId,
    #[serde(default)]
    pub is_transfer: bool,
}

/// Snapshot of an account's current state.
///
/// Disabled accounts (closed or archived) are excluded from every liquidity
/// aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: f64,
    pub initial_balance: f64,
    pub enabled: bool,
}

/// A recurring monthly outflow anchored to a calendar day (1–31).
///
/// Has no end date: it recurs indefinitely within any simulation horizon.
/// An anchor day that a month does not have (e.g. day 31 in April) simply
/// does not fire that month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedExpense {
    pub description: String,
    pub amount: f64,
    /// Day-of-month anchor, 1–31.
    pub day: i8,
}

/// A recurring monthly transaction, bidirectional (e.g. salary) and
/// independently toggle-able.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub description: String,
    pub amount: f64,
    pub day_of_month: i8,
    pub kind: TransactionKind,
    pub active: bool,
}

/// Sum of balances across enabled accounts.
#[must_use]
pub fn total_liquidity(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|a| a.enabled)
        .map(|a| a.balance)
        .sum()
}
