//! Slippage tolerance validation

use merlin_core::{SlippageError, SwapConfig};

use crate::format::format_percent;
use crate::input::parse_decimal;

/// Outcome of an accepted custom slippage edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlippageEdit {
    /// Field emptied; nothing to commit
    Cleared,
    /// Value within bounds, ready to commit
    Accepted(f64),
}

/// Check a value against the configured bounds (inclusive)
pub fn check_bounds(value: f64, config: &SwapConfig) -> Result<f64, SlippageError> {
    if value < config.min_slippage {
        return Err(SlippageError::TooLow {
            min: config.min_slippage,
        });
    }
    if value > config.max_slippage {
        return Err(SlippageError::TooHigh {
            max: config.max_slippage,
        });
    }
    Ok(value)
}

/// Validate the custom slippage text field.
///
/// Empty text is not an error. Anything else must parse as a decimal and lie
/// within `[min_slippage, max_slippage]`.
pub fn validate_custom_slippage(
    text: &str,
    config: &SwapConfig,
) -> Result<SlippageEdit, SlippageError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(SlippageEdit::Cleared);
    }

    let value = parse_decimal(text).ok_or(SlippageError::InvalidNumber)?;
    check_bounds(value, config).map(SlippageEdit::Accepted)
}

/// Settings button label: `Auto: 0.5%` or `1%`
pub fn slippage_label(value: f64, auto: bool) -> String {
    if auto {
        format!("Auto: {}", format_percent(value))
    } else {
        format_percent(value)
    }
}
