//! Numeric text input handling
//!
//! Amount and slippage fields only ever hold digits and at most one decimal
//! point. Anything else typed is stripped.

/// Check for `digits* [.] digits*` (the empty string and a lone `.` included)
pub fn is_valid_numeric_input(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.chars().filter(|c| *c == '.').count() <= 1
}

/// Drop every non-digit, non-dot character and keep only the first dot.
///
/// `"1.2.3"` becomes `"1.23"`, `"$12a"` becomes `"12"`.
pub fn clean_numeric_input(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match cleaned.split_once('.') {
        Some((whole, rest)) if rest.contains('.') => {
            format!("{}.{}", whole, rest.replace('.', ""))
        }
        _ => cleaned,
    }
}

/// Return valid input untouched, cleaned input otherwise
pub fn sanitize_numeric_input(value: &str) -> String {
    if is_valid_numeric_input(value) {
        value.to_string()
    } else {
        clean_numeric_input(value)
    }
}

/// Cut the fractional part to at most `decimals` digits.
///
/// A trailing dot is kept so a half-typed `"5."` survives; with `decimals == 0`
/// the fractional part and the dot are dropped.
pub fn truncate_decimals(value: &str, decimals: usize) -> String {
    match value.split_once('.') {
        Some((whole, fraction)) if fraction.chars().count() > decimals => {
            if decimals == 0 {
                whole.to_string()
            } else {
                let kept: String = fraction.chars().take(decimals).collect();
                format!("{}.{}", whole, kept)
            }
        }
        _ => value.to_string(),
    }
}

/// Parse a sanitized decimal string.
///
/// Accepts `"12"`, `"12.5"`, `"5."` and `".5"`. Rejects the empty string, a
/// lone `"."`, signs, exponents and words.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let value = value.trim();
    if !is_valid_numeric_input(value) || !value.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
