//! Display formatting helpers.
//!
//! All formatting is a pure function of the record being rendered, so the
//! same record always produces the same strings.

use chrono::DateTime;
use shared::Currency;

/// Format an amount with a known currency: `$500,000.00`
pub fn format_currency(amount: f64, currency: Currency) -> String {
    format_with_prefix(amount, currency.symbol())
}

/// Format an amount for a stored currency code. Unknown codes fall back to
/// the raw code as a prefix instead of failing: `XYZ 500,000.00`.
pub fn format_amount(amount: f64, currency_code: &str) -> String {
    match Currency::from_code(currency_code) {
        Some(currency) => format_currency(amount, currency),
        None => format_with_prefix(amount, &format!("{} ", currency_code)),
    }
}

fn format_with_prefix(amount: f64, prefix: &str) -> String {
    let total_cents = (amount.abs() * 100.0).round() as i64;
    let units = total_cents / 100;
    let cents = total_cents % 100;

    // Group the integer part with thousands separators
    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if amount < 0.0 {
        format!("-{}{}.{:02}", prefix, grouped, cents)
    } else {
        format!("{}{}.{:02}", prefix, grouped, cents)
    }
}

/// Render a stored RFC 3339 timestamp for display, falling back to the raw
/// string when it does not parse
pub fn format_timestamp(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_currency(500000.0, Currency::Usd), "$500,000.00");
        assert_eq!(format_currency(1234567.89, Currency::Ngn), "₦1,234,567.89");
        assert_eq!(format_currency(0.0, Currency::Eur), "€0.00");
        assert_eq!(format_currency(999.5, Currency::Gbp), "£999.50");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        assert_eq!(format_currency(-150000.0, Currency::Usd), "-$150,000.00");
        assert_eq!(format_currency(-15.99, Currency::Usd), "-$15.99");
    }

    #[test]
    fn cents_never_spill_into_the_units() {
        // 15.999 rounds to 16.00, not 15.100
        assert_eq!(format_currency(15.999, Currency::Usd), "$16.00");
    }

    #[test]
    fn unknown_currency_code_falls_back_to_the_code() {
        assert_eq!(format_amount(42.0, "XYZ"), "XYZ 42.00");
        assert_eq!(format_amount(42.0, "USD"), "$42.00");
    }

    #[test]
    fn formatting_is_idempotent_per_input() {
        let first = format_currency(350000.0, Currency::Usd);
        let second = format_currency(350000.0, Currency::Usd);
        assert_eq!(first, second);
    }

    #[test]
    fn timestamps_render_human_readable() {
        assert_eq!(
            format_timestamp("2025-07-15T10:30:00+00:00"),
            "Jul 15, 2025 10:30"
        );
        // A malformed timestamp is shown as-is rather than dropped
        assert_eq!(format_timestamp("garbage"), "garbage");
    }
}
