//! What-if scenario hypotheses for the simulation engine
//!
//! A scenario describes one hypothetical change to the user's finances. The
//! simulation engine layers every *active* scenario on top of the baseline
//! trajectory; inactive scenarios are retained in the list but skipped
//! entirely (soft-disable, not deletion).

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One hypothetical change, applied during the scenario walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Scenario {
    /// Reduce a category's historical burn rate by `percentage` percent,
    /// every simulated day. The category is an exact, case-sensitive match
    /// against transaction history.
    ExpenseCut {
        category: String,
        /// Percent of the category's burn rate saved, in (0, 100].
        percentage: f64,
        active: bool,
    },

    /// One monthly cash injection on the monthly anchor day.
    IncomeBoost { amount: f64, active: bool },

    /// One monthly deduction on the monthly anchor day.
    RecurringExpense { amount: f64, active: bool },

    /// A single deduction on the exact calendar date.
    BigPurchase {
        amount: f64,
        date: Date,
        active: bool,
    },
}

impl Scenario {
    /// Whether this scenario participates in the simulation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Scenario::ExpenseCut { active, .. }
            | Scenario::IncomeBoost { active, .. }
            | Scenario::RecurringExpense { active, .. }
            | Scenario::BigPurchase { active, .. } => *active,
        }
    }
}
