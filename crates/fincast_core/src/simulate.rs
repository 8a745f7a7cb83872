//! 365-day what-if scenario simulation
//!
//! Runs two parallel trajectories from the same starting balance: a baseline
//! (burn rate plus fixed/recurring obligations, the forecast mechanics
//! stretched to a year) and a simulated walk that layers the active
//! scenarios on top of the baseline's daily delta. The headline outputs are
//! the balance differences at fixed offsets 180 and 365 into the day-indexed
//! series: array positions, deliberately not calendar-month boundaries.

use jiff::ToSpan;
use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::metrics::{burn_rate, category_burn_rate};
use crate::model::{
    Account, FixedExpense, RecurringTransaction, Scenario, SeriesPoint, SimulationOutcome,
    Transaction, TransactionKind, Verdict, total_liquidity,
};

/// Length of the simulation horizon in projected days.
pub const SIMULATION_HORIZON_DAYS: u32 = 365;

/// Trailing window for the global and per-category burn rates.
const BURN_WINDOW_DAYS: u32 = 90;

/// Scenario effects folded into per-day application form.
struct ScenarioEffects {
    /// Permanent daily saving from expense cuts.
    daily_cut_savings: f64,
    /// Net monthly adjustment (boosts minus recurring expenses), applied on
    /// the monthly anchor day.
    monthly_net: f64,
    /// One-off purchases by exact calendar date.
    purchases: Vec<(Date, f64)>,
}

fn fold_scenarios(
    scenarios: &[Scenario],
    transactions: &[Transaction],
    today: Date,
) -> ScenarioEffects {
    let mut effects = ScenarioEffects {
        daily_cut_savings: 0.0,
        monthly_net: 0.0,
        purchases: Vec::new(),
    };
    // Category rates are shared across scenarios naming the same category.
    let mut category_rates: FxHashMap<&str, f64> = FxHashMap::default();

    for scenario in scenarios.iter().filter(|s| s.is_active()) {
        match scenario {
            Scenario::ExpenseCut {
                category,
                percentage,
                ..
            } => {
                let rate = *category_rates.entry(category.as_str()).or_insert_with(|| {
                    category_burn_rate(transactions, category, today, BURN_WINDOW_DAYS)
                });
                effects.daily_cut_savings += rate * percentage / 100.0;
            }
            Scenario::IncomeBoost { amount, .. } => effects.monthly_net += amount,
            Scenario::RecurringExpense { amount, .. } => effects.monthly_net -= amount,
            Scenario::BigPurchase { amount, date, .. } => effects.purchases.push((*date, *amount)),
        }
    }

    effects
}

/// Run the baseline and scenario-adjusted walks over the next 365 days.
///
/// Both series hold 366 points: day 0 (today, the shared starting balance)
/// through day 365. Inactive scenarios are skipped entirely. Monthly
/// scenario amounts land on every projected day whose calendar day-of-month
/// is 1, plus the first projected day when `today` itself is not the 1st.
/// The opening partial month always counts exactly one application, never
/// two on the same day.
#[must_use]
pub fn run_simulation(
    transactions: &[Transaction],
    accounts: &[Account],
    fixed_expenses: &[FixedExpense],
    recurring: &[RecurringTransaction],
    scenarios: &[Scenario],
    today: Date,
) -> SimulationOutcome {
    let starting_balance = total_liquidity(accounts);
    let global_burn = burn_rate(transactions, today, BURN_WINDOW_DAYS);
    let effects = fold_scenarios(scenarios, transactions, today);

    let capacity = SIMULATION_HORIZON_DAYS as usize + 1;
    let mut baseline = Vec::with_capacity(capacity);
    let mut simulated = Vec::with_capacity(capacity);
    baseline.push(SeriesPoint {
        date: today,
        balance: starting_balance,
    });
    simulated.push(SeriesPoint {
        date: today,
        balance: starting_balance,
    });

    let mut baseline_balance = starting_balance;
    let mut simulated_balance = starting_balance;

    for i in 1..=SIMULATION_HORIZON_DAYS {
        let date = today.saturating_add((i as i64).days());
        let day_of_month = date.day();

        let mut base_delta = -global_burn;
        for fe in fixed_expenses {
            if fe.day == day_of_month {
                base_delta -= fe.amount;
            }
        }
        for rt in recurring.iter().filter(|r| r.active) {
            if rt.day_of_month == day_of_month {
                match rt.kind {
                    TransactionKind::Income => base_delta += rt.amount,
                    TransactionKind::Expense => base_delta -= rt.amount,
                }
            }
        }

        let mut sim_delta = base_delta + effects.daily_cut_savings;

        let monthly_fires = day_of_month == 1 || (i == 1 && today.day() != 1);
        if monthly_fires {
            sim_delta += effects.monthly_net;
        }

        for (purchase_date, amount) in &effects.purchases {
            if *purchase_date == date {
                sim_delta -= amount;
            }
        }

        baseline_balance += base_delta;
        simulated_balance += sim_delta;

        baseline.push(SeriesPoint {
            date,
            balance: baseline_balance,
        });
        simulated.push(SeriesPoint {
            date,
            balance: simulated_balance,
        });
    }

    let difference_6_months = simulated[180].balance - baseline[180].balance;
    let difference_12_months = simulated[365].balance - baseline[365].balance;
    let verdict = if difference_12_months > 0.0 {
        Verdict::Positive
    } else if difference_12_months < 0.0 {
        Verdict::Negative
    } else {
        Verdict::Neutral
    };

    SimulationOutcome {
        baseline,
        simulated,
        difference_6_months,
        difference_12_months,
        verdict,
    }
}
