//! Amount rendering for summaries and chart labels.

pub const DEFAULT_SYMBOL: &str = "₹";

/// Formats `amount` with two decimals, placing the sign before the symbol.
pub fn format_currency_value(amount: f64, symbol: &str) -> String {
    let body = format!("{:.2}", amount.abs());
    // `-0.00` after rounding reads as zero, not as a debt.
    if amount < 0.0 && body.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Percentage label used by the category chart, e.g. `42.5%`.
pub fn format_percentage(part: f64, whole: f64) -> String {
    if whole <= 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_currency_value(1000.0, "₹"), "₹1000.00");
        assert_eq!(format_currency_value(12.345, "$"), "$12.35");
    }

    #[test]
    fn negative_sign_precedes_symbol() {
        assert_eq!(format_currency_value(-200.0, "₹"), "-₹200.00");
        assert_eq!(format_currency_value(-0.001, "₹"), "₹0.00");
    }

    #[test]
    fn percentage_of_whole() {
        assert_eq!(format_percentage(1.0, 4.0), "25.0%");
        assert_eq!(format_percentage(1.0, 0.0), "0.0%");
    }
}
