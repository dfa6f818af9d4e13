//! Core type definitions for Merlin Swap

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog key of a token (e.g. "bnb")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token descriptor as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub symbol: String,
    pub name: String,
    /// Chain label shown next to the symbol (e.g. "BNB Chain")
    pub chain: String,
    /// Display glyph
    pub icon: String,
    pub decimals: u8,
    /// Contract address, when the token has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Token {
    /// Case-insensitive substring match on symbol or name.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle) || self.name.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.symbol, self.chain)
    }
}

/// EVM-style wallet address (`0x` followed by 40 hex digits)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Build a lowercase hex address from 20 raw bytes
    pub fn from_bytes(bytes: &[u8; constants::ADDRESS_BYTES]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check for `0x` + 40 lowercase hex digits
    pub fn is_evm_format(&self) -> bool {
        match self.0.strip_prefix("0x") {
            Some(digits) => {
                digits.len() == constants::ADDRESS_BYTES * 2
                    && digits
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            }
            None => false,
        }
    }

    /// Shortened display form: first 6 and last 4 characters ("0x1234...5678").
    ///
    /// Addresses shorter than 10 characters are returned unchanged.
    pub fn shortened(&self) -> String {
        let len = self.0.len();
        if len < 10 || !self.0.is_ascii() {
            return self.0.clone();
        }
        format!("{}...{}", &self.0[..6], &self.0[len - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// EVM chain identifier
pub type ChainId = u64;

/// USD unit price of a token
pub type UsdPrice = f64;

/// Constants
pub mod constants {
    use super::ChainId;

    /// BNB Smart Chain mainnet
    pub const BNB_CHAIN_ID: ChainId = 56;

    /// Raw byte length of an EVM address
    pub const ADDRESS_BYTES: usize = 20;

    /// Fractional digits of a derived destination amount
    pub const AMOUNT_DISPLAY_DECIMALS: usize = 6;
}
