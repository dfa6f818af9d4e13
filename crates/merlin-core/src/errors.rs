//! Error types for Merlin Swap

use thiserror::Error;

/// Core errors that can occur in Merlin Swap
#[derive(Debug, Error)]
pub enum Error {
    #[error("Swap error: {0}")]
    Swap(#[from] SwapError),

    #[error("Slippage error: {0}")]
    Slippage(#[from] SlippageError),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Swap state errors
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Unknown token: {id}")]
    UnknownToken { id: String },

    #[error("Unknown swap side: {side}")]
    UnknownSide { side: String },

    #[error("Action not allowed: {reason}")]
    ActionNotAllowed { reason: String },
}

/// Rejected custom slippage edits.
///
/// The display strings double as the inline warning text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlippageError {
    #[error("Please enter a valid number")]
    InvalidNumber,

    #[error("Slippage too low (min {min}%), transaction may fail")]
    TooLow { min: f64 },

    #[error("Slippage too high (max {max}%), you may lose funds")]
    TooHigh { max: f64 },
}

/// Wallet connection errors
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Cannot {action} while {status}")]
    InvalidTransition {
        status: &'static str,
        action: &'static str,
    },
}

/// Key-value store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Result type alias for Merlin Swap operations
pub type Result<T> = std::result::Result<T, Error>;

impl SwapError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownToken { .. } => "unknown_token",
            Self::UnknownSide { .. } => "unknown_side",
            Self::ActionNotAllowed { .. } => "action_not_allowed",
        }
    }
}

impl SlippageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNumber => "invalid_number",
            Self::TooLow { .. } => "slippage_too_low",
            Self::TooHigh { .. } => "slippage_too_high",
        }
    }
}

impl WalletError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "invalid_transition",
        }
    }
}
