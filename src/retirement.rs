//! Retirement planning: savings goal and safe withdrawal rate

use crate::error::{ensure_finite, ensure_finite_result, ensure_non_negative, ensure_non_zero, FinanceResult};
use crate::format::format_money;

/// Future value of an annuity due: `pmt * ((1+r)^n - 1) / r * (1+r)`.
///
/// A zero rate collapses to the linear `pmt * n`.
pub fn annuity_due_future_value(payment: f64, months: f64, monthly_rate: f64) -> f64 {
    if monthly_rate == 0.0 {
        return payment * months;
    }

    let growth = (1.0 + monthly_rate).powf(months);
    payment * (growth - 1.0) / monthly_rate * (1.0 + monthly_rate)
}

/// Additional savings needed by retirement, unformatted
pub fn retirement_shortfall(
    monthly_expenses: f64,
    years_until_retirement: f64,
    annual_return_rate_percent: f64,
    current_savings: f64,
) -> FinanceResult<f64> {
    let expenses = ensure_finite("monthly_expenses", monthly_expenses)?;
    let years = ensure_non_negative("years_until_retirement", years_until_retirement)?;
    let rate_percent = ensure_finite("annual_return_rate_percent", annual_return_rate_percent)?;
    let savings = ensure_finite("current_savings", current_savings)?;

    let months = years * 12.0;
    let monthly_rate = rate_percent / 12.0 / 100.0;
    if monthly_rate <= -1.0 {
        return Err(crate::error::FinanceError::invalid(
            "annual_return_rate_percent",
            rate_percent,
            "monthly rate must be greater than -100%",
        ));
    }
    if monthly_rate == 0.0 {
        log::debug!("Zero return rate, using linear annuity");
    }

    ensure_finite_result("retirement_goal", annuity_due_future_value(expenses, months, monthly_rate) - savings)
}

/// Savings still needed to fund `monthly_expenses` by retirement.
///
/// * `annual_return_rate_percent` - percentage (8 = 8%), not a fraction
///
/// The result is signed: a negative amount means current savings already
/// exceed the goal.
pub fn retirement_savings_goal(
    monthly_expenses: f64,
    years_until_retirement: f64,
    annual_return_rate_percent: f64,
    current_savings: f64,
) -> FinanceResult<String> {
    Ok(format_money(retirement_shortfall(
        monthly_expenses,
        years_until_retirement,
        annual_return_rate_percent,
        current_savings,
    )?))
}

/// First-year withdrawal as a percentage of savings, e.g. `"4.00"`.
///
/// `annual_expenses / retirement_savings * 100`. `retirement_years` is
/// accepted for interface compatibility but does not enter the formula;
/// the result is the same for any horizon.
pub fn safe_withdrawal_rate(
    retirement_savings: f64,
    _retirement_years: f64,
    annual_expenses: f64,
) -> FinanceResult<String> {
    let savings = ensure_non_zero("retirement_savings", retirement_savings)?;
    let expenses = ensure_finite("annual_expenses", annual_expenses)?;
    Ok(format_money(ensure_finite_result("withdrawal_rate", expenses / savings * 100.0)?))
}
