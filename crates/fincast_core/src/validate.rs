//! Input validation at the engine boundary
//!
//! The tagged-union contract already guarantees each scenario variant carries
//! its required fields; these checks cover the value ranges the type system
//! cannot express. Callers run them once per invocation, before the engines.

use crate::error::{Result, ValidationError};
use crate::model::{Debt, FixedExpense, RecurringTransaction, Scenario, Transaction};

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteAmount { field });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveAmount { field, value });
    }
    Ok(())
}

fn check_day(field: &'static str, day: i8) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayOutOfRange { field, value: day });
    }
    Ok(())
}

/// Validate the fixed/recurring obligations shared by the forecast and
/// simulation engines.
pub fn validate_obligations(
    fixed_expenses: &[FixedExpense],
    recurring: &[RecurringTransaction],
) -> Result<()> {
    for fe in fixed_expenses {
        check_positive("fixed expense amount", fe.amount)?;
        check_day("fixed expense day", fe.day)?;
    }
    for rt in recurring {
        check_positive("recurring transaction amount", rt.amount)?;
        check_day("recurring transaction day", rt.day_of_month)?;
    }
    Ok(())
}

/// Validate the scenario list against the transaction history.
///
/// Only *active* scenarios are checked against history: an inactive
/// `expense_cut` may legitimately reference a category that has aged out of
/// the ledger. The category join is exact and case-sensitive, same as the
/// engine applies it.
pub fn validate_scenarios(scenarios: &[Scenario], transactions: &[Transaction]) -> Result<()> {
    for scenario in scenarios {
        match scenario {
            Scenario::ExpenseCut {
                category,
                percentage,
                active,
            } => {
                check_finite("expense cut percentage", *percentage)?;
                if *percentage <= 0.0 || *percentage > 100.0 {
                    return Err(ValidationError::PercentageOutOfRange { value: *percentage });
                }
                if *active && !transactions.iter().any(|t| t.category == *category) {
                    return Err(ValidationError::UnknownCategory {
                        category: category.clone(),
                    });
                }
            }
            Scenario::IncomeBoost { amount, .. } => {
                check_positive("income boost amount", *amount)?;
            }
            Scenario::RecurringExpense { amount, .. } => {
                check_positive("recurring expense amount", *amount)?;
            }
            Scenario::BigPurchase { amount, .. } => {
                check_positive("big purchase amount", *amount)?;
            }
        }
    }
    Ok(())
}

/// Validate a debt portfolio before amortization.
pub fn validate_debts(debts: &[Debt]) -> Result<()> {
    for debt in debts {
        check_positive("debt balance", debt.current_balance)?;
        check_positive("minimum payment", debt.minimum_payment)?;
        check_finite("interest rate", debt.interest_rate)?;
        if debt.interest_rate < 0.0 {
            return Err(ValidationError::NonPositiveAmount {
                field: "interest rate",
                value: debt.interest_rate,
            });
        }
        check_day("due day", debt.due_day)?;
    }
    Ok(())
}
