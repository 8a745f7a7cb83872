use std::fmt;

/// Errors raised by the validation boundary before an engine runs.
///
/// The engines themselves never error: they return degenerate-but-valid
/// results for empty or pathological inputs. Validation exists to reject
/// records that would otherwise produce silently wrong numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A monetary field that must be strictly positive was not.
    NonPositiveAmount { field: &'static str, value: f64 },
    /// A day-of-month anchor outside 1–31.
    DayOutOfRange { field: &'static str, value: i8 },
    /// An `expense_cut` percentage outside (0, 100].
    PercentageOutOfRange { value: f64 },
    /// An active `expense_cut` names a category absent from the
    /// transaction history (exact, case-sensitive match).
    UnknownCategory { category: String },
    /// A monetary field holding NaN or infinity.
    NonFiniteAmount { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveAmount { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ValidationError::DayOutOfRange { field, value } => {
                write!(f, "{field} must be a day of month in 1-31, got {value}")
            }
            ValidationError::PercentageOutOfRange { value } => {
                write!(f, "expense cut percentage must be in (0, 100], got {value}")
            }
            ValidationError::UnknownCategory { category } => {
                write!(f, "category {category:?} does not appear in the transaction history")
            }
            ValidationError::NonFiniteAmount { field } => {
                write!(f, "{field} must be a finite number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
