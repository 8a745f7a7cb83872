//! Engine output types
//!
//! Plain serializable records with no behavior beyond small accessors,
//! suitable for direct JSON transport or chart-library consumption. A thrown
//! error would blank the dashboard rendering them, so the engines always
//! produce one of these, degenerate-but-valid when inputs are empty.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One day of the 30-day forecast walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: Date,
    pub balance: f64,
    /// `false` only for day 0, the actual current balance.
    pub is_projected: bool,
    /// Net change applied on this day (0 for day 0).
    pub cashflow: f64,
    /// Comma-joined descriptions of the fixed/recurring items that fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

/// Traffic-light classification of the 30-day outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastStatus {
    Safe,
    Warning,
    Critical,
}

/// Headline numbers for the forecast horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub month_end_balance: f64,
    pub lowest_balance: f64,
    pub lowest_balance_date: Date,
    pub daily_burn: f64,
    pub status: ForecastStatus,
    /// First day index (1-based) the balance crosses negative, if it does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_negative: Option<u32>,
}

/// Full output of the forecast engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub points: Vec<ForecastPoint>,
    pub summary: ForecastSummary,
}

/// One day of a simulation trajectory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: Date,
    pub balance: f64,
}

/// Sign of the 12-month scenario impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Positive,
    Negative,
    Neutral,
}

/// Output of the scenario simulation: two 366-point trajectories
/// (day 0 = today through day 365) and their headline differences.
///
/// `difference_6_months` and `difference_12_months` read fixed offsets 180
/// and 365 of the day-indexed series (array positions, not calendar-month
/// boundaries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub baseline: Vec<SeriesPoint>,
    pub simulated: Vec<SeriesPoint>,
    pub difference_6_months: f64,
    pub difference_12_months: f64,
    pub verdict: Verdict,
}

/// Liquidity risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Derived liquidity-risk read: safe to recompute on every render/poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub risk_level: RiskLevel,
    /// Combined variable + fixed daily outflow.
    pub daily_burn: f64,
    pub days_until_empty: i64,
    /// Linear 30-day-ahead projection of total liquidity.
    pub projected_balance: f64,
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Month number, 1-based.
    pub month: u32,
    /// Aggregate balance remaining across all debts after this month.
    pub total_balance: f64,
    /// Interest accrued and paid this month.
    pub interest_paid: f64,
    /// Principal retired this month (minimums + extra pool).
    pub principal_paid: f64,
}

/// Output of the debt payoff engine.
///
/// `months_to_payoff == 360` together with a positive final balance in the
/// schedule means the portfolio does not converge under the given payments;
/// the caller should flag that state rather than expect an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffProjection {
    pub debt_free_date: Date,
    pub total_interest_paid: f64,
    pub months_to_payoff: u32,
    pub schedule: Vec<AmortizationEntry>,
}

impl PayoffProjection {
    /// Balance left at the end of the schedule (0 when the plan converges).
    #[must_use]
    pub fn remaining_balance(&self) -> f64 {
        self.schedule.last().map_or(0.0, |e| e.total_balance)
    }

    /// True when the 360-month cap was hit with debt still outstanding.
    #[must_use]
    pub fn diverges(&self) -> bool {
        self.months_to_payoff == crate::payoff::MAX_PAYOFF_MONTHS && self.remaining_balance() > 0.0
    }
}

/// Spend aggregated over one category, for the dashboard breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
    /// Fraction of the window's total variable spend, in [0, 1].
    pub share: f64,
}
