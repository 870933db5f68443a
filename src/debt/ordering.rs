//! Debt repayment ordering strategies
//!
//! - **Snowball**: smallest balance first
//! - **Avalanche**: highest interest rate first
//!
//! Both sorts are stable, so debts that compare equal keep their input order.
//! The `Vec` variants take ownership and hand the reordered list back; the
//! `sort_*` variants reorder a caller-owned slice in place.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Debt;
use crate::error::{FinanceError, FinanceResult};

/// Repayment ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffStrategy {
    /// Ascending by balance
    Snowball,
    /// Descending by interest rate
    Avalanche,
}

impl PayoffStrategy {
    /// Reorder `debts` in place according to this strategy
    pub fn sort(&self, debts: &mut [Debt]) -> FinanceResult<()> {
        match self {
            PayoffStrategy::Snowball => sort_snowball(debts),
            PayoffStrategy::Avalanche => sort_avalanche(debts),
        }
    }
}

/// Order debts ascending by balance
pub fn debt_snowball(mut debts: Vec<Debt>) -> FinanceResult<Vec<Debt>> {
    sort_snowball(&mut debts)?;
    Ok(debts)
}

/// Order debts descending by interest rate
///
/// Every debt must carry a numeric `interest_rate`.
pub fn debt_avalanche(mut debts: Vec<Debt>) -> FinanceResult<Vec<Debt>> {
    sort_avalanche(&mut debts)?;
    Ok(debts)
}

/// In-place snowball ordering
pub fn sort_snowball(debts: &mut [Debt]) -> FinanceResult<()> {
    for debt in debts.iter() {
        if debt.balance.is_nan() {
            return Err(FinanceError::invalid(
                "balance",
                debt.balance,
                format!("debt '{}' has no numeric balance", debt.name),
            ));
        }
    }
    debts.sort_by(|a, b| compare(a.balance, b.balance));
    Ok(())
}

/// In-place avalanche ordering
pub fn sort_avalanche(debts: &mut [Debt]) -> FinanceResult<()> {
    for debt in debts.iter() {
        match debt.interest_rate {
            Some(rate) if !rate.is_nan() => {}
            other => {
                return Err(FinanceError::invalid(
                    "interest_rate",
                    other.unwrap_or(f64::NAN),
                    format!("debt '{}' has no numeric interest rate", debt.name),
                ));
            }
        }
    }
    debts.sort_by(|a, b| compare(b.interest_rate.unwrap_or(0.0), a.interest_rate.unwrap_or(0.0)));
    Ok(())
}

// NaN has been rejected by the callers
fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
