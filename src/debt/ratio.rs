//! Debt-to-income ratio

use crate::error::{ensure_finite, ensure_finite_result, ensure_non_zero, FinanceResult};
use crate::format::format_money;

/// Debt-to-income ratio as a percentage, e.g. `"30.00"` for 30%.
///
/// `debt / income * 100`. Zero income is rejected rather than producing
/// an infinite ratio.
pub fn calculate_dti(total_monthly_debt_payments: f64, total_monthly_income: f64) -> FinanceResult<String> {
    Ok(format_money(dti_ratio(total_monthly_debt_payments, total_monthly_income)?))
}

/// Unformatted debt-to-income percentage
pub fn dti_ratio(total_monthly_debt_payments: f64, total_monthly_income: f64) -> FinanceResult<f64> {
    let debt = ensure_finite("total_monthly_debt_payments", total_monthly_debt_payments)?;
    let income = ensure_non_zero("total_monthly_income", total_monthly_income)?;
    ensure_finite_result("dti", debt / income * 100.0)
}
