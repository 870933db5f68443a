//! Systematic investment plan (SIP) growth
//!
//! Each month the contribution is deposited first and the whole balance then
//! earns one month of interest at `annual_rate / 12`. Compounding before
//! depositing gives a different (smaller) result.

use super::compounding::effective_rate;
use crate::error::{ensure_finite, ensure_finite_result, ensure_rate_above_minus_one, FinanceResult};
use crate::format::format_money;

/// Balance after `months` deposit-then-compound periods
pub fn sip_balance(monthly_payment: f64, months: u32, annual_rate: f64) -> FinanceResult<f64> {
    let payment = ensure_finite("monthly_payment", monthly_payment)?;
    let annual_rate = ensure_finite("roi", annual_rate)?;
    let monthly_rate = ensure_rate_above_minus_one("monthly_rate", annual_rate / 12.0)?;

    let mut balance = 0.0;
    for _ in 0..months {
        balance += payment;
        balance *= 1.0 + monthly_rate;
        if !balance.is_finite() {
            break;
        }
    }

    ensure_finite_result("sip_balance", balance)
}

/// Accumulated value of a fixed monthly contribution at nominal return `roi`
pub fn sip_returns(monthly_payment: f64, months: u32, roi: f64) -> FinanceResult<String> {
    Ok(format_money(sip_balance(monthly_payment, months, roi)?))
}

/// Accumulated value at the real return `roi - inflation_rate` (6% when `None`)
pub fn sip_returns_with_inflation(
    monthly_payment: f64,
    months: u32,
    roi: f64,
    inflation_rate: Option<f64>,
) -> FinanceResult<String> {
    if let Some(inflation) = inflation_rate {
        ensure_finite("inflation_rate", inflation)?;
    }
    let rate = effective_rate(ensure_finite("roi", roi)?, inflation_rate);
    Ok(format_money(sip_balance(monthly_payment, months, rate)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_months() {
        assert_eq!(sip_returns(5000.0, 0, 0.12).unwrap(), "0.00");
        assert_eq!(sip_returns(123.45, 0, -0.5).unwrap(), "0.00");
        assert_eq!(sip_returns_with_inflation(5000.0, 0, 0.12, None).unwrap(), "0.00");
    }

    #[test]
    fn test_deposit_then_compound() {
        // Month 1: (0 + 1000) * 1.01 = 1010
        // Month 2: (1010 + 1000) * 1.01 = 2030.10
        assert_eq!(sip_returns(1000.0, 2, 0.12).unwrap(), "2030.10");
    }

    #[test]
    fn test_matches_annuity_due_closed_form() {
        let (p, n, r) = (1000.0_f64, 120u32, 0.12_f64 / 12.0);
        let expected = p * ((1.0 + r).powi(n as i32) - 1.0) / r * (1.0 + r);
        assert_relative_eq!(sip_balance(p, n, 0.12).unwrap(), expected, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_rate_is_sum_of_deposits() {
        assert_eq!(sip_returns(250.0, 12, 0.0).unwrap(), "3000.00");
        // 0.06 real return minus default 0.06 inflation
        assert_eq!(sip_returns_with_inflation(250.0, 12, 0.06, None).unwrap(), "3000.00");
    }

    #[test]
    fn test_inflation_variant_uses_real_rate() {
        assert_eq!(
            sip_returns_with_inflation(1000.0, 24, 0.14, Some(0.02)).unwrap(),
            sip_returns(1000.0, 24, 0.12).unwrap()
        );
    }

    #[test]
    fn test_overflowing_balance_rejected() {
        let err = sip_returns(1e6, 100_000, 1.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput { field: "sip_balance", .. }));
        assert!(sip_returns_with_inflation(1e6, 100_000, 1.06, None).is_err());
    }

    #[test]
    fn test_repeat_calls_agree() {
        assert_eq!(sip_returns(1500.0, 180, 0.11), sip_returns(1500.0, 180, 0.11));
        assert_eq!(
            sip_returns_with_inflation(1500.0, 180, 0.11, None),
            sip_returns_with_inflation(1500.0, 180, 0.11, None)
        );
    }

    #[test]
    fn test_monthly_rate_floor() {
        assert!(sip_returns(100.0, 3, -12.0).is_err());
        assert!(sip_returns(100.0, 3, f64::NAN).is_err());
    }
}
