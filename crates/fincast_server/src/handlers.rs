//! Request handlers
//!
//! Each handler validates its payload, then calls the pure engine and
//! returns the result as JSON. The service keeps no state: persistence of
//! ledgers and scenarios belongs to the backing store upstream, and every
//! request carries the full input snapshot it wants computed.

use axum::Json;
use jiff::Zoned;
use jiff::civil::Date;
use serde::Deserialize;

use fincast_core::model::{
    Account, CategorySpending, Debt, FixedExpense, Forecast, PayoffProjection, PayoffStrategy,
    RecurringTransaction, RiskAnalysis, Scenario, SimulationOutcome, Transaction,
};
use fincast_core::validate::{validate_debts, validate_obligations, validate_scenarios};
use fincast_core::{
    analysis, analyze_risk, burn_rate, calculate_payoff, generate_forecast, run_simulation,
};

use crate::error::{ApiError, ApiResult};
use crate::validation::{
    validate_extra_payment, validate_fixed_monthly_cost, validate_window_days,
};

/// Resolve the request's anchor date, defaulting to the server's civil date.
fn resolve_today(today: Option<Date>) -> Date {
    today.unwrap_or_else(|| Zoned::now().date())
}

fn default_window_days() -> u32 {
    30
}

#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub fixed_monthly_cost: f64,
    pub today: Option<Date>,
}

pub async fn risk(Json(req): Json<RiskRequest>) -> ApiResult<Json<RiskAnalysis>> {
    validate_fixed_monthly_cost(req.fixed_monthly_cost)?;

    let today = resolve_today(req.today);
    Ok(Json(analyze_risk(
        &req.transactions,
        &req.accounts,
        req.fixed_monthly_cost,
        today,
    )))
}

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub recurring_transactions: Vec<RecurringTransaction>,
    pub today: Option<Date>,
}

pub async fn forecast(Json(req): Json<ForecastRequest>) -> ApiResult<Json<Forecast>> {
    validate_obligations(&req.fixed_expenses, &req.recurring_transactions)?;

    let today = resolve_today(req.today);
    let daily_burn = burn_rate(&req.transactions, today, 30);
    Ok(Json(generate_forecast(
        &req.accounts,
        &req.fixed_expenses,
        &req.recurring_transactions,
        daily_burn,
        today,
    )))
}

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub recurring_transactions: Vec<RecurringTransaction>,
    pub scenarios: Vec<Scenario>,
    pub today: Option<Date>,
}

pub async fn simulate(Json(req): Json<SimulateRequest>) -> ApiResult<Json<SimulationOutcome>> {
    validate_obligations(&req.fixed_expenses, &req.recurring_transactions)?;
    validate_scenarios(&req.scenarios, &req.transactions)?;

    let today = resolve_today(req.today);
    // Long histories make the dual 365-day walk worth taking off the
    // async runtime.
    let outcome = tokio::task::spawn_blocking(move || {
        run_simulation(
            &req.transactions,
            &req.accounts,
            &req.fixed_expenses,
            &req.recurring_transactions,
            &req.scenarios,
            today,
        )
    })
    .await
    .map_err(|_| ApiError::InternalError)?;

    Ok(Json(outcome))
}

#[derive(Debug, Deserialize)]
pub struct PayoffRequest {
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub extra_payment: f64,
    pub strategy: PayoffStrategy,
    pub today: Option<Date>,
}

pub async fn payoff(Json(req): Json<PayoffRequest>) -> ApiResult<Json<PayoffProjection>> {
    validate_extra_payment(req.extra_payment)?;
    validate_debts(&req.debts)?;

    let today = resolve_today(req.today);
    Ok(Json(calculate_payoff(
        &req.debts,
        req.extra_payment,
        req.strategy,
        today,
    )))
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub transactions: Vec<Transaction>,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    pub today: Option<Date>,
}

pub async fn summary(Json(req): Json<SummaryRequest>) -> ApiResult<Json<Vec<CategorySpending>>> {
    validate_window_days(req.window_days)?;

    let today = resolve_today(req.today);
    Ok(Json(analysis::spending_by_category(
        &req.transactions,
        today,
        req.window_days,
    )))
}
