//! Formatting boundary between full-precision numbers and displayed amounts

/// Render a money amount or percentage with exactly two decimals.
///
/// All calculators compute at full `f64` precision and only round here.
/// Negative zero is printed as `0.00`.
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    if formatted == "-0.00" {
        "0.00".to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(format_money(30.0), "30.00");
        assert_eq!(format_money(14693.280768), "14693.28");
        assert_eq!(format_money(-1234.5), "-1234.50");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_money(-0.0), "0.00");
        assert_eq!(format_money(-0.001), "0.00");
    }
}
