//! Swap Constants
//!
//! Builtin token catalog, fabricated USD prices and slippage presets.

/// Builtin token catalog
pub mod catalog {
    /// Const-constructible token row, expanded into a `Token` at startup
    #[derive(Debug, Clone, Copy)]
    pub struct TokenEntry {
        pub id: &'static str,
        pub symbol: &'static str,
        pub name: &'static str,
        pub chain: &'static str,
        pub icon: &'static str,
        pub decimals: u8,
        pub address: Option<&'static str>,
    }

    /// Catalog rows in display order
    pub const BUILTIN_TOKENS: &[TokenEntry] = &[
        TokenEntry {
            id: "bnb",
            symbol: "BNB",
            name: "BNB",
            chain: "BNB Chain",
            icon: "🟡",
            decimals: 18,
            address: Some("0x0000000000000000000000000000000000000000"),
        },
        TokenEntry {
            id: "cake",
            symbol: "CAKE",
            name: "PancakeSwap Token",
            chain: "BNB Chain",
            icon: "🥞",
            decimals: 18,
            address: Some("0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82"),
        },
        TokenEntry {
            id: "usdt",
            symbol: "USDT",
            name: "Tether USD",
            chain: "BNB Chain",
            icon: "💵",
            decimals: 6,
            address: Some("0x55d398326f99059fF775485246999027B3197955"),
        },
        TokenEntry {
            id: "eth",
            symbol: "ETH",
            name: "Ethereum",
            chain: "Ethereum",
            icon: "💎",
            decimals: 18,
            address: Some("0x2170Ed0880ac9A755fd29B2688956BD959F933F8"),
        },
    ];

    /// Fabricated USD unit prices keyed by token id
    pub const BUILTIN_PRICES: &[(&str, f64)] = &[
        ("bnb", 300.0),
        ("cake", 2.5),
        ("usdt", 1.0),
        ("eth", 2000.0),
    ];
}

/// Slippage tolerance presets (percent)
pub mod slippage {
    /// One-click preset values
    pub const PRESETS: &[f64] = &[0.1, 0.5, 1.0];
}

/// Display strings
pub mod display {
    /// USD value of an empty or zero-priced side
    pub const ZERO_USD: &str = "$0.00";

    /// USD value that rounds below one cent
    pub const DUST_USD: &str = "<$0.01";

    /// Smallest USD value shown with digits
    pub const DUST_THRESHOLD: f64 = 0.01;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_has_a_price() {
        for token in catalog::BUILTIN_TOKENS {
            assert!(
                catalog::BUILTIN_PRICES.iter().any(|(id, _)| *id == token.id),
                "missing price for {}",
                token.id
            );
        }
    }

    #[test]
    fn test_presets_within_default_bounds() {
        let config = merlin_core::SwapConfig::default();
        assert!(slippage::PRESETS
            .iter()
            .all(|p| *p >= config.min_slippage && *p <= config.max_slippage));
        assert!(slippage::PRESETS.contains(&config.default_slippage));
    }
}
