//! Debt record shared by the ordering, ratio and payoff calculators

use serde::{Deserialize, Serialize};

/// A single outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Display name (e.g. "Visa", "Car loan")
    pub name: String,

    /// Outstanding balance, never negative
    pub balance: f64,

    /// Annual interest rate as a fraction (0.18 = 18%).
    /// Only the avalanche ordering and the payoff simulation read it.
    #[serde(default)]
    pub interest_rate: Option<f64>,
}

impl Debt {
    /// Create a debt without an interest rate
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            interest_rate: None,
        }
    }

    /// Create a debt with an annual interest rate
    pub fn with_rate(name: impl Into<String>, balance: f64, interest_rate: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            interest_rate: Some(interest_rate),
        }
    }

    /// Monthly interest accrued on the current balance (zero when no rate is known)
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.interest_rate.unwrap_or(0.0) / 12.0
    }

    /// True once the balance has been cleared
    pub fn is_paid_off(&self) -> bool {
        self.balance <= 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_interest() {
        let debt = Debt::with_rate("Visa", 1200.0, 0.18);
        assert!((debt.monthly_interest() - 18.0).abs() < 1e-10);

        let no_rate = Debt::new("Friend", 500.0);
        assert_eq!(no_rate.monthly_interest(), 0.0);
    }
}
