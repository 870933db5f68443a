//! Default assumptions shared by the calculators

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FinanceError, FinanceResult};

/// Inflation rate used by the inflation-adjusted calculators when none is given
pub const DEFAULT_INFLATION_RATE: f64 = 0.06;

/// Upper bound on simulated months for debt payoff (100 years)
pub const DEFAULT_MAX_PAYOFF_MONTHS: u32 = 1200;

/// Assumptions applied when a caller does not supply a value explicitly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Annual inflation rate as a fraction (0.06 = 6%)
    pub inflation_rate: f64,

    /// Months the payoff simulation may run before reporting non-convergence
    pub max_payoff_months: u32,
}

impl Assumptions {
    /// Load assumptions from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> FinanceResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| FinanceError::Assumptions {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&text)
    }

    /// Parse assumptions from a JSON document
    pub fn from_json_str(text: &str) -> FinanceResult<Self> {
        let assumptions: Assumptions =
            serde_json::from_str(text).map_err(|e| FinanceError::Assumptions {
                reason: e.to_string(),
            })?;
        crate::error::ensure_rate_above_minus_one("inflation_rate", assumptions.inflation_rate)?;
        Ok(assumptions)
    }

    /// Replace the inflation rate
    pub fn with_inflation_rate(mut self, inflation_rate: f64) -> Self {
        self.inflation_rate = inflation_rate;
        self
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            max_payoff_months: DEFAULT_MAX_PAYOFF_MONTHS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let a = Assumptions::default();
        assert_eq!(a.inflation_rate, 0.06);
        assert_eq!(a.max_payoff_months, 1200);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let a = Assumptions::from_json_str(r#"{ "inflation_rate": 0.03 }"#).unwrap();
        assert_eq!(a.inflation_rate, 0.03);
        assert_eq!(a.max_payoff_months, DEFAULT_MAX_PAYOFF_MONTHS);
    }

    #[test]
    fn test_with_inflation_rate() {
        let a = Assumptions::default().with_inflation_rate(0.025);
        assert_eq!(a.inflation_rate, 0.025);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(Assumptions::from_json_str("{ not json").is_err());
        assert!(Assumptions::from_json_str(r#"{ "inflation_rate": -1.5 }"#).is_err());
    }
}
