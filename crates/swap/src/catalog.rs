//! Token catalog
//!
//! Ordered token list plus the parallel USD price table.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use merlin_core::{SwapError, Token, TokenId, UsdPrice};

use crate::constants::catalog::{TokenEntry, BUILTIN_PRICES, BUILTIN_TOKENS};

static BUILTIN: LazyLock<Arc<TokenCatalog>> = LazyLock::new(|| {
    Arc::new(TokenCatalog::new(
        BUILTIN_TOKENS.iter().map(token_from_entry).collect(),
        BUILTIN_PRICES
            .iter()
            .map(|(id, price)| (TokenId::new(*id), *price)),
    ))
});

fn token_from_entry(entry: &TokenEntry) -> Token {
    Token {
        id: TokenId::new(entry.id),
        symbol: entry.symbol.to_string(),
        name: entry.name.to_string(),
        chain: entry.chain.to_string(),
        icon: entry.icon.to_string(),
        decimals: entry.decimals,
        address: entry.address.map(str::to_string),
    }
}

/// Immutable token list with USD unit prices
#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
    prices: HashMap<TokenId, UsdPrice>,
}

impl TokenCatalog {
    /// Build a catalog; later rows with an already listed id are dropped
    pub fn new(tokens: Vec<Token>, prices: impl IntoIterator<Item = (TokenId, UsdPrice)>) -> Self {
        let mut unique: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if unique.iter().any(|t| t.id == token.id) {
                tracing::warn!(token = %token.id, "duplicate catalog entry ignored");
                continue;
            }
            unique.push(token);
        }

        Self {
            tokens: unique,
            prices: prices.into_iter().collect(),
        }
    }

    /// The builtin four-token catalog, shared process-wide
    pub fn builtin() -> Arc<Self> {
        BUILTIN.clone()
    }

    /// All tokens in catalog order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id.as_str() == id)
    }

    /// Look up a token, failing with `UnknownToken`
    pub fn require(&self, id: &str) -> Result<&Token, SwapError> {
        self.get(id)
            .ok_or_else(|| SwapError::UnknownToken { id: id.to_string() })
    }

    /// USD unit price; unlisted tokens are worth 0
    pub fn price(&self, id: &TokenId) -> UsdPrice {
        self.prices.get(id).copied().unwrap_or(0.0)
    }

    /// Tokens whose symbol or name contains `query`, case-insensitively.
    ///
    /// An empty query returns the full catalog. Catalog order is kept.
    pub fn search(&self, query: &str) -> Vec<&Token> {
        if query.is_empty() {
            return self.tokens.iter().collect();
        }
        let needle = query.to_lowercase();
        self.tokens.iter().filter(|t| t.matches(&needle)).collect()
    }
}
