//! Month-by-month amortization schedule

use serde::{Deserialize, Serialize};

use super::emi::LoanTerms;
use crate::error::FinanceResult;

/// One month of a loan's amortization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Full amortization of a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Level monthly payment
    pub emi: f64,
    pub rows: Vec<AmortizationRow>,
    pub total_interest: f64,
    pub total_payment: f64,
}

impl AmortizationSchedule {
    /// Build the schedule for validated loan terms.
    ///
    /// A part-month tenure gets one extra, smaller final payment.
    pub fn from_terms(terms: &LoanTerms) -> FinanceResult<Self> {
        let emi = terms.emi()?;
        let months = terms.payment_count();
        let mut rows = Vec::new();
        let mut balance = terms.principal;

        for month in 1..=months {
            let interest = balance * terms.monthly_rate;
            let mut principal = emi - interest;
            let mut payment = emi;

            // Final payment absorbs floating point residue
            if month == months {
                principal = balance;
                payment = principal + interest;
            }

            let closing = if month == months { 0.0 } else { balance - principal };
            rows.push(AmortizationRow {
                month,
                opening_balance: balance,
                payment,
                interest,
                principal,
                closing_balance: closing,
            });
            balance = closing;
        }

        let total_interest: f64 = rows.iter().map(|r| r.interest).sum();
        let total_payment: f64 = rows.iter().map(|r| r.payment).sum();

        Ok(Self {
            emi,
            rows,
            total_interest,
            total_payment,
        })
    }
}

/// Amortization schedule for a loan quoted with an annual percentage rate
pub fn amortization_schedule(
    principal: f64,
    annual_interest_rate_percent: f64,
    tenure_years: f64,
) -> FinanceResult<AmortizationSchedule> {
    let terms = LoanTerms::from_annual(principal, annual_interest_rate_percent, tenure_years)?;
    AmortizationSchedule::from_terms(&terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_schedule_pays_down_to_zero() {
        let schedule = amortization_schedule(100_000.0, 10.0, 5.0).unwrap();

        assert_eq!(schedule.rows.len(), 60);
        assert_eq!(schedule.rows.last().unwrap().closing_balance, 0.0);
        assert_abs_diff_eq!(schedule.rows.last().unwrap().payment, schedule.emi, epsilon = 1e-6);

        let principal_paid: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(principal_paid, 100_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(schedule.total_payment, schedule.emi * 60.0, epsilon = 1e-6);
        assert_abs_diff_eq!(schedule.total_interest, schedule.total_payment - 100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_first_row() {
        let schedule = amortization_schedule(12_000.0, 12.0, 1.0).unwrap();
        let first = &schedule.rows[0];
        assert_abs_diff_eq!(first.interest, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal, schedule.emi - 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.closing_balance, 12_000.0 - first.principal, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_declines_each_month() {
        let schedule = amortization_schedule(50_000.0, 7.0, 3.0).unwrap();
        for pair in schedule.rows.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
        }
    }

    #[test]
    fn test_fractional_tenure_adds_final_part_payment() {
        let schedule = amortization_schedule(12_000.0, 12.0, 1.04).unwrap();
        assert_eq!(schedule.rows.len(), 13);

        let last = schedule.rows.last().unwrap();
        assert_eq!(last.closing_balance, 0.0);
        assert!(last.payment < schedule.emi);
        let principal_paid: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        assert_abs_diff_eq!(principal_paid, 12_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_huge_tenure_rejected_without_allocating() {
        assert!(amortization_schedule(1000.0, 5.0, 1e9).is_err());
    }

    #[test]
    fn test_zero_rate_schedule() {
        let schedule = amortization_schedule(1_200.0, 0.0, 1.0).unwrap();
        assert_eq!(schedule.total_interest, 0.0);
        assert_abs_diff_eq!(schedule.rows[5].closing_balance, 600.0, epsilon = 1e-9);
    }
}
