//! Error types for the finance calculators

use thiserror::Error;

/// Result type used by every calculator in this crate
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Errors raised when a calculation cannot produce a meaningful number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// An argument lies outside the domain of the formula
    /// (zero denominator, rate at or below -100%, negative duration, NaN).
    #[error("Invalid input for `{field}`: {value} - {reason}")]
    InvalidInput {
        /// Name of the offending argument
        field: &'static str,
        /// The value that was supplied
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// A debts file could not be read or parsed
    #[error("Failed to load debts: {reason}")]
    DebtLoad {
        /// Description of the failure
        reason: String,
    },

    /// An assumptions file could not be read or parsed
    #[error("Invalid assumptions: {reason}")]
    Assumptions {
        /// Description of the failure
        reason: String,
    },

    /// The payoff simulation did not clear every balance
    #[error("Debts not paid off within {months} months")]
    NonConvergent {
        /// Number of months simulated before giving up
        months: u32,
    },
}

impl FinanceError {
    /// Shorthand for building an [`FinanceError::InvalidInput`]
    pub fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        FinanceError::InvalidInput {
            field,
            value,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite arguments
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::invalid(field, value, "must be a finite number"))
    }
}

/// Reject negative (or non-finite) arguments
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> FinanceResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(FinanceError::invalid(field, value, "must not be negative"));
    }
    Ok(value)
}

/// Reject zero denominators
pub(crate) fn ensure_non_zero(field: &'static str, value: f64) -> FinanceResult<f64> {
    let value = ensure_finite(field, value)?;
    if value == 0.0 {
        return Err(FinanceError::invalid(field, value, "division by zero"));
    }
    Ok(value)
}

/// Growth factors `(1 + rate)` must stay strictly positive
pub(crate) fn ensure_rate_above_minus_one(field: &'static str, rate: f64) -> FinanceResult<f64> {
    let rate = ensure_finite(field, rate)?;
    if rate <= -1.0 {
        return Err(FinanceError::invalid(field, rate, "effective rate must be greater than -1"));
    }
    Ok(rate)
}

/// Reject a computed value that overflowed to infinity or collapsed to NaN
pub(crate) fn ensure_finite_result(calculation: &'static str, value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinanceError::invalid(calculation, value, "inputs overflow the representable range"))
    }
}
