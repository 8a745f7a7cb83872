mod debt;
mod ids;
mod records;
mod results;
mod scenario;

pub use debt::{Debt, PayoffStrategy};
pub use ids::{AccountId, TransactionId};
pub use records::{
    Account, FixedExpense, RecurringTransaction, Transaction, TransactionKind, total_liquidity,
};
pub use results::{
    AmortizationEntry, CategorySpending, Forecast, ForecastPoint, ForecastStatus, ForecastSummary,
    PayoffProjection, RiskAnalysis, RiskLevel, SeriesPoint, SimulationOutcome, Verdict,
};
pub use scenario::Scenario;
