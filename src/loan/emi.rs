//! Equated monthly instalment (EMI) for an amortizing loan

use crate::error::{ensure_finite_result, ensure_non_negative, FinanceError, FinanceResult};
use crate::format::format_money;

/// Longest loan term accepted, in years
pub const MAX_TENURE_YEARS: f64 = 100.0;

/// Loan terms converted to monthly periods
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    /// Monthly rate as a fraction (`annual percent / 12 / 100`)
    pub monthly_rate: f64,
    /// Number of monthly periods (`years * 12`), fractional for part-month tenures
    pub periods: f64,
}

impl LoanTerms {
    /// Validate and convert annual-percentage terms.
    ///
    /// `annual_interest_rate_percent` is a percentage (10 = 10%), unlike the
    /// growth calculators which take fractions.
    pub fn from_annual(principal: f64, annual_interest_rate_percent: f64, tenure_years: f64) -> FinanceResult<Self> {
        let principal = ensure_non_negative("principal", principal)?;
        let rate = ensure_non_negative("annual_interest_rate_percent", annual_interest_rate_percent)?;
        let years = ensure_non_negative("tenure_years", tenure_years)?;

        if years == 0.0 {
            return Err(FinanceError::invalid("tenure_years", years, "loan must have a positive term"));
        }
        if years > MAX_TENURE_YEARS {
            return Err(FinanceError::invalid(
                "tenure_years",
                years,
                format!("loan term must not exceed {} years", MAX_TENURE_YEARS),
            ));
        }

        Ok(Self {
            principal,
            monthly_rate: rate / 12.0 / 100.0,
            periods: years * 12.0,
        })
    }

    /// Number of payments in the schedule; a part month still needs a payment
    pub fn payment_count(&self) -> u32 {
        // periods <= MAX_TENURE_YEARS * 12; tolerance keeps 28.0000000001 at 28
        (self.periods - 1e-9).ceil().max(1.0) as u32
    }

    /// Level monthly payment.
    ///
    /// `P * r * (1+r)^n / ((1+r)^n - 1)`; a zero rate falls back to `P / n`.
    pub fn emi(&self) -> FinanceResult<f64> {
        let n = self.periods;
        if self.monthly_rate == 0.0 {
            log::debug!("Zero interest loan, using straight-line payment");
            return Ok(self.principal / n);
        }

        let r = self.monthly_rate;
        let growth = (1.0 + r).powf(n);
        ensure_finite_result("emi", self.principal * r * growth / (growth - 1.0))
    }
}

/// Monthly instalment for a loan, e.g. `"2124.70"`.
///
/// * `principal` - amount borrowed
/// * `annual_interest_rate_percent` - annual rate in percent (10 = 10%)
/// * `tenure_years` - loan term in years, at most [`MAX_TENURE_YEARS`]
pub fn calculate_emi(principal: f64, annual_interest_rate_percent: f64, tenure_years: f64) -> FinanceResult<String> {
    let terms = LoanTerms::from_annual(principal, annual_interest_rate_percent, tenure_years)?;
    Ok(format_money(terms.emi()?))
}
