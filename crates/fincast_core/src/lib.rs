//! Financial projection and payoff-simulation core
//!
//! This crate holds the algorithmic heart of a personal finance tracker:
//! - Liquidity metrics: burn rate, net worth, runway, risk classification
//! - A 30-day balance forecast combining burn rate with fixed and recurring
//!   obligations
//! - A 365-day what-if simulation running baseline and scenario-adjusted
//!   trajectories side by side
//! - Debt payoff amortization under avalanche or snowball prioritization
//!
//! Every engine is a pure, deterministic, synchronous function over
//! in-memory slices: no I/O, no clock reads ("today" is always a
//! parameter), no shared state between calls. Inputs are treated as
//! read-only snapshots; anything mutated during a simulation is a private
//! clone. Degenerate inputs produce degenerate-but-valid outputs (zero
//! rates, sentinel runway, empty schedules) rather than errors, because the
//! results feed dashboards directly. The iteration ceilings (30-day
//! forecast, 365-day simulation, 360-month payoff) are the only bounds on
//! run time and hold for any input.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod payoff;
pub mod simulate;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::ValidationError;
pub use forecast::{FORECAST_HORIZON_DAYS, generate_forecast};
pub use metrics::{
    EXCLUDED_CATEGORIES, RUNWAY_UNBOUNDED, analyze_risk, burn_rate, category_burn_rate, net_worth,
    runway_days,
};
pub use payoff::{MAX_PAYOFF_MONTHS, calculate_payoff};
pub use simulate::{SIMULATION_HORIZON_DAYS, run_simulation};
