use crate::error::{ApiError, ApiResult};

/// Validate an extra-payment amount for the payoff endpoint
pub fn validate_extra_payment(extra_payment: f64) -> ApiResult<()> {
    if !extra_payment.is_finite() {
        return Err(ApiError::InvalidParameter {
            field: "extra_payment".to_string(),
            message: "Extra payment must be a finite number".to_string(),
        });
    }

    if extra_payment < 0.0 {
        return Err(ApiError::InvalidParameter {
            field: "extra_payment".to_string(),
            message: "Extra payment cannot be negative".to_string(),
        });
    }

    Ok(())
}

/// Validate a fixed monthly cost for the risk endpoint
pub fn validate_fixed_monthly_cost(fixed_monthly_cost: f64) -> ApiResult<()> {
    if !fixed_monthly_cost.is_finite() {
        return Err(ApiError::InvalidParameter {
            field: "fixed_monthly_cost".to_string(),
            message: "Fixed monthly cost must be a finite number".to_string(),
        });
    }

    if fixed_monthly_cost < 0.0 {
        return Err(ApiError::InvalidParameter {
            field: "fixed_monthly_cost".to_string(),
            message: "Fixed monthly cost cannot be negative".to_string(),
        });
    }

    Ok(())
}

/// Validate a trailing-window length for the summary endpoint
pub fn validate_window_days(window_days: u32) -> ApiResult<()> {
    if window_days == 0 {
        return Err(ApiError::InvalidParameter {
            field: "window_days".to_string(),
            message: "Window must be at least 1 day".to_string(),
        });
    }

    if window_days > 3_650 {
        return Err(ApiError::InvalidParameter {
            field: "window_days".to_string(),
            message: "Window cannot exceed 3,650 days".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_extra_payment() {
        assert!(validate_extra_payment(0.0).is_ok());
        assert!(validate_extra_payment(250.0).is_ok());
        assert!(validate_extra_payment(-1.0).is_err());
        assert!(validate_extra_payment(f64::NAN).is_err());
        assert!(validate_extra_payment(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_window_days() {
        assert!(validate_window_days(1).is_ok());
        assert!(validate_window_days(90).is_ok());
        assert!(validate_window_days(3_650).is_ok());
        assert!(validate_window_days(0).is_err());
        assert!(validate_window_days(3_651).is_err());
    }

    #[test]
    fn test_validate_fixed_monthly_cost() {
        assert!(validate_fixed_monthly_cost(0.0).is_ok());
        assert!(validate_fixed_monthly_cost(900.0).is_ok());
        assert!(validate_fixed_monthly_cost(-900.0).is_err());
    }
}
