//! 30-day balance forecast
//!
//! A deterministic day-by-day walk from today's actual balance. Every
//! projected day subtracts the flat variable burn, then fires whichever
//! fixed expenses and active recurring transactions are anchored to that
//! calendar day. The day-of-month is recomputed from the real calendar date
//! each iteration, so month boundaries inside the horizon behave like real
//! months: a day-31 anchor does not fire in a 30-day month.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::model::{
    Account, FixedExpense, Forecast, ForecastPoint, ForecastStatus, ForecastSummary,
    RecurringTransaction, TransactionKind, total_liquidity,
};

/// Length of the forecast horizon in projected days.
pub const FORECAST_HORIZON_DAYS: u32 = 30;

/// Project the total enabled-account balance over the next 30 days.
///
/// Day 0 is the actual current balance (`is_projected: false`); days 1–30
/// are projected. `daily_burn` is typically [`crate::metrics::burn_rate`]
/// over a trailing 30-day window, but callers may pass any non-negative
/// rate. `today` anchors the walk; inject a pinned date in tests.
#[must_use]
pub fn generate_forecast(
    accounts: &[Account],
    fixed_expenses: &[FixedExpense],
    recurring: &[RecurringTransaction],
    daily_burn: f64,
    today: Date,
) -> Forecast {
    let starting_balance = total_liquidity(accounts);

    let mut points = Vec::with_capacity(FORECAST_HORIZON_DAYS as usize + 1);
    points.push(ForecastPoint {
        date: today,
        balance: starting_balance,
        is_projected: false,
        cashflow: 0.0,
        event: None,
    });

    let mut balance = starting_balance;
    let mut lowest_balance = starting_balance;
    let mut lowest_balance_date = today;
    let mut days_until_negative: Option<u32> = None;

    for i in 1..=FORECAST_HORIZON_DAYS {
        let date = today.saturating_add((i as i64).days());
        let day_of_month = date.day();

        let mut cashflow = -daily_burn;
        let mut events: Vec<&str> = Vec::new();

        for fe in fixed_expenses {
            if fe.day == day_of_month {
                cashflow -= fe.amount;
                events.push(&fe.description);
            }
        }

        for rt in recurring.iter().filter(|r| r.active) {
            if rt.day_of_month == day_of_month {
                match rt.kind {
                    TransactionKind::Income => cashflow += rt.amount,
                    TransactionKind::Expense => cashflow -= rt.amount,
                }
                events.push(&rt.description);
            }
        }

        balance += cashflow;

        if balance < lowest_balance {
            lowest_balance = balance;
            lowest_balance_date = date;
        }
        // First crossing only; later recoveries and re-crossings don't move it.
        if balance < 0.0 && days_until_negative.is_none() {
            days_until_negative = Some(i);
        }

        points.push(ForecastPoint {
            date,
            balance,
            is_projected: true,
            cashflow,
            event: if events.is_empty() {
                None
            } else {
                Some(events.join(", "))
            },
        });
    }

    let month_end_balance = balance;
    let status = match days_until_negative {
        Some(day) if day < 15 => ForecastStatus::Critical,
        Some(_) => ForecastStatus::Warning,
        None if lowest_balance < month_end_balance * 0.10 => ForecastStatus::Warning,
        None => ForecastStatus::Safe,
    };

    Forecast {
        points,
        summary: ForecastSummary {
            month_end_balance,
            lowest_balance,
            lowest_balance_date,
            daily_burn,
            status,
            days_until_negative,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AccountId;
    use jiff::civil::date;

    fn account(balance: f64) -> Account {
        Account {
            id: AccountId(1),
            name: "Checking".to_string(),
            balance,
            initial_balance: balance,
            enabled: true,
        }
    }

    #[test]
    fn test_day_zero_is_actual() {
        let forecast = generate_forecast(&[account(500.0)], &[], &[], 10.0, date(2025, 6, 15));

        let day0 = &forecast.points[0];
        assert!(!day0.is_projected);
        assert_eq!(day0.balance, 500.0);
        assert_eq!(day0.cashflow, 0.0);
        assert_eq!(forecast.points.len(), 31);
    }

    #[test]
    fn test_flat_burn_only() {
        let forecast = generate_forecast(&[account(600.0)], &[], &[], 10.0, date(2025, 6, 15));

        assert_eq!(forecast.points[1].balance, 590.0);
        assert_eq!(forecast.summary.month_end_balance, 300.0);
        assert_eq!(forecast.summary.status, ForecastStatus::Safe);
        assert!(forecast.summary.days_until_negative.is_none());
    }

    #[test]
    fn test_fixed_expense_fires_on_anchor_day() {
        let fixed = vec![FixedExpense {
            description: "Rent".to_string(),
            amount: 900.0,
            day: 20,
        }];
        let forecast = generate_forecast(&[account(5_000.0)], &fixed, &[], 0.0, date(2025, 6, 15));

        // June 20 is day index 5
        let day = &forecast.points[5];
        assert_eq!(day.date, date(2025, 6, 20));
        assert_eq!(day.cashflow, -900.0);
        assert_eq!(day.event.as_deref(), Some("Rent"));
        assert_eq!(forecast.points[6].cashflow, 0.0);
    }

    #[test]
    fn test_day_31_anchor_skipped_in_short_month() {
        // Horizon 2025-06-16..=2025-07-15: June has no 31st, July 31 is
        // outside the window, so a day-31 anchor never fires.
        let fixed = vec![FixedExpense {
            description: "Quirk".to_string(),
            amount: 100.0,
            day: 31,
        }];
        let forecast = generate_forecast(&[account(1_000.0)], &fixed, &[], 0.0, date(2025, 6, 15));

        assert_eq!(forecast.summary.month_end_balance, 1_000.0);
        assert!(forecast.points.iter().all(|p| p.event.is_none()));
    }

    #[test]
    fn test_recurring_income_and_event_labels() {
        let fixed = vec![FixedExpense {
            description: "Rent".to_string(),
            amount: 900.0,
            day: 1,
        }];
        let recurring = vec![
            RecurringTransaction {
                description: "Salary".to_string(),
                amount: 3_000.0,
                day_of_month: 1,
                kind: TransactionKind::Income,
                active: true,
            },
            RecurringTransaction {
                description: "Old gym".to_string(),
                amount: 50.0,
                day_of_month: 1,
                kind: TransactionKind::Expense,
                active: false,
            },
        ];
        let forecast =
            generate_forecast(&[account(100.0)], &fixed, &recurring, 0.0, date(2025, 6, 15));

        // July 1 is day index 16
        let day = &forecast.points[16];
        assert_eq!(day.date, date(2025, 7, 1));
        assert_eq!(day.cashflow, 2_100.0);
        assert_eq!(day.event.as_deref(), Some("Rent, Salary"));
    }

    #[test]
    fn test_negative_crossing_recorded_once() {
        let recurring = vec![RecurringTransaction {
            description: "Salary".to_string(),
            amount: 500.0,
            day_of_month: 20,
            kind: TransactionKind::Income,
            active: true,
        }];
        // Burn 20/day from 50: negative on day 3, recovers on June 20 (day 5),
        // then crosses again later. days_until_negative stays 3.
        let forecast =
            generate_forecast(&[account(50.0)], &[], &recurring, 20.0, date(2025, 6, 15));

        assert_eq!(forecast.summary.days_until_negative, Some(3));
        assert_eq!(forecast.summary.status, ForecastStatus::Critical);
    }

    #[test]
    fn test_warning_when_lowest_dips_below_tenth_of_final() {
        let recurring = vec![RecurringTransaction {
            description: "Salary".to_string(),
            amount: 3_000.0,
            day_of_month: 10,
            kind: TransactionKind::Income,
            active: true,
        }];
        // Slides from 310 to 70 by July 9 (never negative), then the July 10
        // salary lands and it finishes at 3,010: lowest 70 < 10% of 3,010.
        let forecast =
            generate_forecast(&[account(310.0)], &[], &recurring, 10.0, date(2025, 6, 15));

        assert!(forecast.summary.days_until_negative.is_none());
        assert!(forecast.summary.lowest_balance < forecast.summary.month_end_balance * 0.10);
        assert_eq!(forecast.summary.status, ForecastStatus::Warning);
    }

    #[test]
    fn test_forecast_deterministic() {
        let fixed = vec![FixedExpense {
            description: "Rent".to_string(),
            amount: 900.0,
            day: 1,
        }];
        let today = date(2025, 6, 15);
        let a = generate_forecast(&[account(2_000.0)], &fixed, &[], 12.5, today);
        let b = generate_forecast(&[account(2_000.0)], &fixed, &[], 12.5, today);

        assert_eq!(a.points.len(), b.points.len());
        for (pa, pb) in a.points.iter().zip(&b.points) {
            assert_eq!(pa.date, pb.date);
            assert_eq!(pa.balance, pb.balance);
            assert_eq!(pa.cashflow, pb.cashflow);
            assert_eq!(pa.event, pb.event);
        }
        assert_eq!(a.summary.status, b.summary.status);
    }
}
