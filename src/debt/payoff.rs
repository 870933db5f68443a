//! Month-by-month debt payoff simulation
//!
//! Each month every open debt accrues `balance * rate / 12`, then the whole
//! monthly budget is paid out in strategy order: the first open debt takes
//! as much as it needs and the remainder rolls to the next.

use serde::{Deserialize, Serialize};

use super::{Debt, PayoffStrategy};
use crate::assumptions::Assumptions;
use crate::error::{ensure_finite, FinanceError, FinanceResult};

/// Month in which a debt was cleared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffEvent {
    pub name: String,
    /// 1-based simulation month (0 if the debt started at a zero balance)
    pub month: u32,
}

/// Result of a payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,

    /// Months needed to clear every debt
    pub months: u32,

    /// Interest accrued over the whole plan
    pub total_interest: f64,

    /// Sum of all payments made
    pub total_paid: f64,

    /// Debts in the order they were cleared
    pub payoff_order: Vec<PayoffEvent>,
}

/// Simulate paying `monthly_budget` per month against `debts`
pub fn simulate_payoff(
    debts: &[Debt],
    strategy: PayoffStrategy,
    monthly_budget: f64,
    assumptions: &Assumptions,
) -> FinanceResult<PayoffPlan> {
    let budget = ensure_finite("monthly_budget", monthly_budget)?;
    if budget <= 0.0 {
        return Err(FinanceError::invalid("monthly_budget", budget, "must be positive"));
    }
    for debt in debts {
        if !debt.balance.is_finite() || debt.balance < 0.0 {
            return Err(FinanceError::invalid(
                "balance",
                debt.balance,
                format!("debt '{}' must have a non-negative balance", debt.name),
            ));
        }
    }

    let mut open: Vec<Debt> = debts.to_vec();
    strategy.sort(&mut open)?;

    let mut plan = PayoffPlan {
        strategy,
        months: 0,
        total_interest: 0.0,
        total_paid: 0.0,
        payoff_order: Vec::new(),
    };

    for debt in open.iter().filter(|d| d.is_paid_off()) {
        plan.payoff_order.push(PayoffEvent { name: debt.name.clone(), month: 0 });
    }

    let mut month = 0;
    while open.iter().any(|d| !d.is_paid_off()) {
        if month >= assumptions.max_payoff_months {
            return Err(FinanceError::NonConvergent { months: month });
        }
        month += 1;

        // Accrue interest on every open debt
        let mut interest = 0.0;
        for debt in open.iter_mut().filter(|d| !d.is_paid_off()) {
            let accrued = debt.monthly_interest();
            debt.balance += accrued;
            interest += accrued;
        }
        plan.total_interest += interest;

        if month == 1 && budget <= interest {
            log::debug!("Budget {:.2} does not cover first month interest {:.2}", budget, interest);
            return Err(FinanceError::NonConvergent { months: month });
        }

        // Pay in strategy order
        let mut remaining = budget;
        for debt in open.iter_mut().filter(|d| !d.is_paid_off()) {
            if remaining <= 0.0 {
                break;
            }
            let payment = remaining.min(debt.balance);
            debt.balance -= payment;
            remaining -= payment;
            plan.total_paid += payment;

            if debt.is_paid_off() {
                debt.balance = 0.0;
                plan.payoff_order.push(PayoffEvent { name: debt.name.clone(), month });
            }
        }
    }

    plan.months = month;
    log::debug!(
        "{:?} payoff finished in {} months, interest {:.2}",
        strategy,
        plan.months,
        plan.total_interest
    );
    Ok(plan)
}
