//! Personal Finance - calculators for everyday money decisions
//!
//! This library provides:
//! - Debt repayment ordering (snowball, avalanche) and payoff simulation
//! - Debt-to-income ratio
//! - Loan EMI and amortization schedules
//! - Lump-sum and SIP growth, nominal and inflation-adjusted
//! - Retirement savings goal and safe withdrawal rate
//!
//! Every calculator is a pure function. Money amounts and percentages are
//! returned as strings fixed to two decimals (see [`format_money`]); inputs
//! outside a formula's domain return [`FinanceError::InvalidInput`].
//!
//! Rate units differ by function and are kept as published: `calculate_emi`
//! and `retirement_savings_goal` take percentages (10 = 10%), the growth
//! calculators and debt rates take fractions (0.10 = 10%).

pub mod error;
pub mod format;
pub mod assumptions;
pub mod debt;
pub mod loan;
pub mod growth;
pub mod retirement;

// Re-export commonly used types
pub use error::{FinanceError, FinanceResult};
pub use format::format_money;
pub use assumptions::{Assumptions, DEFAULT_INFLATION_RATE};
pub use debt::{calculate_dti, debt_avalanche, debt_snowball, simulate_payoff, Debt, PayoffPlan, PayoffStrategy};
pub use loan::{amortization_schedule, calculate_emi, AmortizationSchedule};
pub use growth::{
    future_value_with_inflation, future_value_without_inflation, lump_sum_returns,
    lump_sum_returns_with_inflation, present_value_with_inflation, present_value_without_inflation,
    sip_returns, sip_returns_with_inflation,
};
pub use retirement::{retirement_savings_goal, safe_withdrawal_rate};
