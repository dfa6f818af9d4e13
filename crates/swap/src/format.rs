//! Display formatting for amounts, USD values and percentages

use crate::constants::display::{DUST_THRESHOLD, DUST_USD, ZERO_USD};

/// Fixed-point rendering with exactly `decimals` fractional digits (never scientific)
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Insert `,` every three digits of an integer digit string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a USD value for display.
///
/// - zero, negative or non-finite: `"$0.00"`
/// - positive but below one cent: `"<$0.01"`
/// - otherwise thousands separators and two decimals (`"$1,234.50"`)
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return ZERO_USD.to_string();
    }
    if value < DUST_THRESHOLD {
        return DUST_USD.to_string();
    }

    let fixed = format_fixed(value, 2);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("${}.{}", group_thousands(whole), cents)
}

/// Shortest decimal rendering of a percentage (`0.5` -> `"0.5%"`, `1.0` -> `"1%"`)
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}
