//! Lump-sum compounding and discounting
//!
//! Every function here is `amount * (1 + rate)^years` or its inverse, where
//! `rate` is either the nominal annual return or the real return
//! `roi - inflation_rate`. Rates are annual fractions (0.08 = 8%).

use crate::assumptions::DEFAULT_INFLATION_RATE;
use crate::error::{
    ensure_finite, ensure_finite_result, ensure_non_negative, ensure_rate_above_minus_one, FinanceResult,
};
use crate::format::format_money;

/// Real rate used by the inflation-adjusted calculators
pub fn effective_rate(roi: f64, inflation_rate: Option<f64>) -> f64 {
    roi - inflation_rate.unwrap_or(DEFAULT_INFLATION_RATE)
}

/// Annual rate applied when growing or discounting a lump sum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveRate {
    rate: f64,
}

impl EffectiveRate {
    /// Nominal return with no inflation adjustment
    pub fn nominal(roi: f64) -> FinanceResult<Self> {
        Self::new(ensure_finite("roi", roi)?)
    }

    /// Return net of inflation; `None` uses the 6% default
    pub fn real(roi: f64, inflation_rate: Option<f64>) -> FinanceResult<Self> {
        let roi = ensure_finite("roi", roi)?;
        if let Some(inflation) = inflation_rate {
            ensure_finite("inflation_rate", inflation)?;
        }
        Self::new(effective_rate(roi, inflation_rate))
    }

    fn new(rate: f64) -> FinanceResult<Self> {
        Ok(Self {
            rate: ensure_rate_above_minus_one("effective_rate", rate)?,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// `(1 + rate)^years`
    pub fn growth_factor(&self, years: f64) -> f64 {
        (1.0 + self.rate).powf(years)
    }

    /// Grow `amount` forward by `years`
    pub fn compound(&self, amount: f64, years: f64) -> FinanceResult<f64> {
        let amount = ensure_finite("amount", amount)?;
        let years = ensure_non_negative("years", years)?;
        ensure_finite_result("future_value", amount * self.growth_factor(years))
    }

    /// Discount `amount` back by `years`
    pub fn discount(&self, amount: f64, years: f64) -> FinanceResult<f64> {
        let amount = ensure_finite("amount", amount)?;
        let years = ensure_non_negative("years", years)?;
        ensure_finite_result("present_value", amount / self.growth_factor(years))
    }
}

/// Value of a one-off investment after `years` at nominal return `roi`
pub fn lump_sum_returns(principal: f64, years: f64, roi: f64) -> FinanceResult<String> {
    Ok(format_money(EffectiveRate::nominal(roi)?.compound(principal, years)?))
}

/// Same calculation as [`lump_sum_returns`]
pub fn future_value_without_inflation(principal: f64, years: f64, roi: f64) -> FinanceResult<String> {
    lump_sum_returns(principal, years, roi)
}

/// Value of a one-off investment in today's money, growing at `roi - inflation_rate`
pub fn lump_sum_returns_with_inflation(
    principal: f64,
    years: f64,
    roi: f64,
    inflation_rate: Option<f64>,
) -> FinanceResult<String> {
    Ok(format_money(EffectiveRate::real(roi, inflation_rate)?.compound(principal, years)?))
}

/// Same calculation as [`lump_sum_returns_with_inflation`]
pub fn future_value_with_inflation(
    principal: f64,
    years: f64,
    roi: f64,
    inflation_rate: Option<f64>,
) -> FinanceResult<String> {
    lump_sum_returns_with_inflation(principal, years, roi, inflation_rate)
}

/// Amount to invest today to reach `future_amount` after `years`
pub fn present_value_without_inflation(future_amount: f64, years: f64, roi: f64) -> FinanceResult<String> {
    Ok(format_money(EffectiveRate::nominal(roi)?.discount(future_amount, years)?))
}

/// Present value discounted at the real rate `roi - inflation_rate`
pub fn present_value_with_inflation(
    future_amount: f64,
    years: f64,
    roi: f64,
    inflation_rate: Option<f64>,
) -> FinanceResult<String> {
    Ok(format_money(EffectiveRate::real(roi, inflation_rate)?.discount(future_amount, years)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum() {
        assert_eq!(lump_sum_returns(10_000.0, 5.0, 0.08).unwrap(), "14693.28");
        assert_eq!(future_value_without_inflation(10_000.0, 5.0, 0.08).unwrap(), "14693.28");
        assert_eq!(lump_sum_returns(10_000.0, 0.0, 0.08).unwrap(), "10000.00");
    }

    #[test]
    fn test_inflation_defaults_to_six_percent() {
        // real rate 0.12 - 0.06 = 0.06; 1.06^10 = 1.790847697
        assert_eq!(lump_sum_returns_with_inflation(1000.0, 10.0, 0.12, None).unwrap(), "1790.85");
        assert_eq!(
            future_value_with_inflation(1000.0, 10.0, 0.12, None).unwrap(),
            lump_sum_returns_with_inflation(1000.0, 10.0, 0.12, Some(0.06)).unwrap()
        );
        assert_eq!(lump_sum_returns_with_inflation(1000.0, 2.0, 0.05, Some(0.05)).unwrap(), "1000.00");
    }

    #[test]
    fn test_negative_real_rate_shrinks() {
        // 0.03 - 0.06 = -0.03
        let value: f64 = lump_sum_returns_with_inflation(1000.0, 1.0, 0.03, None).unwrap().parse().unwrap();
        assert_eq!(value, 970.0);
    }

    #[test]
    fn test_present_value() {
        assert_eq!(present_value_without_inflation(14_693.28, 5.0, 0.08).unwrap(), "10000.00");
        assert_eq!(present_value_with_inflation(1790.85, 10.0, 0.12, None).unwrap(), "1000.00");
    }

    #[test]
    fn test_present_value_inverts_future_value() {
        for &(p, y, r) in &[(2500.0, 3.0, 0.05), (1.0e6, 30.0, 0.11), (750.0, 7.5, -0.2), (40.0, 1.0, 0.0)] {
            let rate = EffectiveRate::nominal(r).unwrap();
            let fv = rate.compound(p, y).unwrap();
            assert_relative_eq!(rate.discount(fv, y).unwrap(), p, max_relative = 1e-12);

            let fv_text = future_value_without_inflation(p, y, r).unwrap();
            let pv: f64 = present_value_without_inflation(fv_text.parse().unwrap(), y, r)
                .unwrap()
                .parse()
                .unwrap();
            // half a cent on the future value, scaled back, plus half a cent on the result
            let tolerance = 0.005 / rate.growth_factor(y) + 0.005 + 1e-9;
            assert!((pv - p).abs() <= tolerance, "round trip {} -> {}", p, pv);
        }
    }

    #[test]
    fn test_rate_at_or_below_minus_one_rejected() {
        let err = lump_sum_returns(1000.0, 2.0, -1.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput { field: "effective_rate", .. }));
        assert!(present_value_with_inflation(1000.0, 2.0, -0.95, Some(0.1)).is_err());
    }

    #[test]
    fn test_overflowing_growth_rejected() {
        let err = lump_sum_returns(1e6, 10_000.0, 0.5).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput { field: "future_value", .. }));
        assert!(future_value_with_inflation(1e6, 10_000.0, 0.56, None).is_err());

        // (1 - 0.99)^400 underflows to zero
        let err = present_value_without_inflation(1000.0, 400.0, -0.99).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput { field: "present_value", .. }));
    }

    #[test]
    fn test_repeat_calls_agree() {
        assert_eq!(lump_sum_returns(8_250.0, 12.5, 0.071), lump_sum_returns(8_250.0, 12.5, 0.071));
        assert_eq!(
            present_value_with_inflation(50_000.0, 9.0, 0.1, Some(0.03)),
            present_value_with_inflation(50_000.0, 9.0, 0.1, Some(0.03))
        );
    }

    #[test]
    fn test_negative_years_rejected() {
        assert!(lump_sum_returns(1000.0, -1.0, 0.05).is_err());
        assert!(present_value_without_inflation(1000.0, -0.5, 0.05).is_err());
    }

    #[test]
    fn test_effective_rate() {
        assert_relative_eq!(effective_rate(0.1, None), 0.04);
        assert_relative_eq!(effective_rate(0.1, Some(0.02)), 0.08);
        assert_relative_eq!(EffectiveRate::real(0.1, None).unwrap().rate(), 0.04);
    }
}
