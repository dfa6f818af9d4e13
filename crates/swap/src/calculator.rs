//! Swap Calculator
//!
//! Price-table conversion: both sides are valued in USD and the destination
//! amount is the USD value divided by the destination unit price.

use merlin_core::constants::AMOUNT_DISPLAY_DECIMALS;
use merlin_core::{Token, UsdPrice};

use crate::catalog::TokenCatalog;
use crate::format::{format_fixed, format_usd};
use crate::input::parse_decimal;

/// Parse an amount, treating empty, unparseable and zero amounts as absent
pub(crate) fn positive_amount(amount: &str) -> Option<f64> {
    parse_decimal(amount).filter(|v| *v > 0.0)
}

/// Convert `amount` units priced at `price_in` into units priced at `price_out`.
///
/// Returns `None` when `price_out` is zero.
pub fn convert(amount: f64, price_in: UsdPrice, price_out: UsdPrice) -> Option<f64> {
    if price_out == 0.0 {
        return None;
    }
    Some(amount * price_in / price_out)
}

/// Destination amount for the given inputs.
///
/// Empty when either token is unset, the amount is empty, zero or
/// unparseable, or the destination price is zero. Otherwise six fixed
/// fractional digits.
pub fn derive_destination_amount(
    catalog: &TokenCatalog,
    source: Option<&Token>,
    destination: Option<&Token>,
    source_amount: &str,
) -> String {
    let (Some(source), Some(destination)) = (source, destination) else {
        return String::new();
    };
    let Some(amount) = positive_amount(source_amount) else {
        return String::new();
    };

    match convert(
        amount,
        catalog.price(&source.id),
        catalog.price(&destination.id),
    ) {
        Some(output) => format_fixed(output, AMOUNT_DISPLAY_DECIMALS),
        None => String::new(),
    }
}

/// USD value of `amount` of `token`, unformatted
pub fn usd_value(catalog: &TokenCatalog, token: &Token, amount: &str) -> f64 {
    let amount = parse_decimal(amount).unwrap_or(0.0);
    catalog.price(&token.id) * amount
}

/// USD display string for one side of the swap
pub fn side_usd_value(catalog: &TokenCatalog, token: Option<&Token>, amount: &str) -> String {
    match token {
        Some(token) => format_usd(usd_value(catalog, token, amount)),
        None => format_usd(0.0),
    }
}

/// Rate line shown under the swap card, e.g. `1 BNB ≈ 120.000000 CAKE`.
///
/// `None` unless both tokens are set and the source amount is positive.
pub fn exchange_rate_line(
    source: Option<&Token>,
    destination: Option<&Token>,
    source_amount: &str,
    destination_amount: &str,
) -> Option<String> {
    let (source, destination) = (source?, destination?);
    let input = positive_amount(source_amount)?;

    let rate = match positive_amount(destination_amount) {
        Some(output) => format_fixed(output / input, AMOUNT_DISPLAY_DECIMALS),
        None => "0".to_string(),
    };

    Some(format!(
        "1 {} ≈ {} {}",
        source.symbol, rate, destination.symbol
    ))
}
