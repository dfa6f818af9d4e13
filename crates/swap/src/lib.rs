//! Merlin Swap trading core
//!
//! Static token catalog with fabricated USD prices, and the swap state
//! container that derives destination amounts from it.

pub mod calculator;
pub mod catalog;
pub mod constants;
pub mod format;
pub mod input;
pub mod slippage;
pub mod state;

// Re-exports
pub use calculator::{derive_destination_amount, exchange_rate_line, side_usd_value};
pub use catalog::TokenCatalog;
pub use constants::slippage::PRESETS as SLIPPAGE_PRESETS;
pub use format::{format_fixed, format_percent, format_usd};
pub use input::{
    clean_numeric_input, is_valid_numeric_input, parse_decimal, sanitize_numeric_input,
    truncate_decimals,
};
pub use slippage::{slippage_label, validate_custom_slippage, SlippageEdit};
pub use state::{SwapSide, SwapState};
