//! Swap State
//!
//! Selected tokens, amounts and slippage for the swap card. The destination
//! amount is never set directly; every mutation recomputes it from the
//! source side and the catalog prices.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use merlin_core::{SlippageError, SwapConfig, SwapError, Token};

use crate::calculator::{
    derive_destination_amount, exchange_rate_line, positive_amount, side_usd_value,
};
use crate::catalog::TokenCatalog;
use crate::input::{sanitize_numeric_input, truncate_decimals};
use crate::slippage::{check_bounds, slippage_label, validate_custom_slippage, SlippageEdit};

/// One side of the swap card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapSide {
    /// Token being sold ("From")
    Source,
    /// Token being bought ("To")
    Destination,
}

impl SwapSide {
    pub fn other(self) -> Self {
        match self {
            Self::Source => Self::Destination,
            Self::Destination => Self::Source,
        }
    }

    /// Card label
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "From",
            Self::Destination => "To",
        }
    }
}

impl fmt::Display for SwapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

impl FromStr for SwapSide {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "source" | "from" => Ok(Self::Source),
            "destination" | "to" => Ok(Self::Destination),
            _ => Err(SwapError::UnknownSide {
                side: s.to_string(),
            }),
        }
    }
}

/// Swap card state container
#[derive(Debug, Clone)]
pub struct SwapState {
    catalog: Arc<TokenCatalog>,
    config: SwapConfig,
    source: Option<Token>,
    destination: Option<Token>,
    source_amount: String,
    destination_amount: String,
    slippage: f64,
    auto_slippage: bool,
}

impl SwapState {
    /// Empty card: no tokens, no amounts, auto slippage at the configured default
    pub fn new(catalog: Arc<TokenCatalog>, config: SwapConfig) -> Self {
        Self {
            slippage: config.default_slippage,
            auto_slippage: true,
            catalog,
            config,
            source: None,
            destination: None,
            source_amount: String::new(),
            destination_amount: String::new(),
        }
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Token> {
        self.source.as_ref()
    }

    pub fn destination(&self) -> Option<&Token> {
        self.destination.as_ref()
    }

    pub fn token(&self, side: SwapSide) -> Option<&Token> {
        match side {
            SwapSide::Source => self.source(),
            SwapSide::Destination => self.destination(),
        }
    }

    pub fn source_amount(&self) -> &str {
        &self.source_amount
    }

    pub fn destination_amount(&self) -> &str {
        &self.destination_amount
    }

    pub fn amount(&self, side: SwapSide) -> &str {
        match side {
            SwapSide::Source => self.source_amount(),
            SwapSide::Destination => self.destination_amount(),
        }
    }

    /// Slippage tolerance in percent
    pub fn slippage(&self) -> f64 {
        self.slippage
    }

    pub fn is_auto_slippage(&self) -> bool {
        self.auto_slippage
    }

    /// Put `token` on `side`.
    ///
    /// When the token already sits on the other side, the two token/amount
    /// pairs are exchanged instead and `true` is returned.
    pub fn select_token(&mut self, side: SwapSide, token: Token) -> bool {
        let occupied_by_other = self
            .token(side.other())
            .is_some_and(|other| other.id == token.id);

        if occupied_by_other {
            tracing::debug!(token = %token.id, side = %side, "token on opposite side, swapping");
            self.exchange_sides();
            return true;
        }

        tracing::debug!(token = %token.id, side = %side, "token selected");
        match side {
            SwapSide::Source => {
                self.source = Some(token);
                // A previously typed amount may exceed the new precision
                self.source_amount = self.fit_source_amount(&self.source_amount);
            }
            SwapSide::Destination => self.destination = Some(token),
        }
        self.recompute();
        false
    }

    /// Catalog lookup followed by [`select_token`](Self::select_token)
    pub fn select_token_by_id(&mut self, side: SwapSide, id: &str) -> Result<bool, SwapError> {
        let token = self.catalog.require(id)?.clone();
        Ok(self.select_token(side, token))
    }

    /// Store user-typed source amount and recompute the destination.
    ///
    /// Input is sanitized and cut to the source token's precision. Rejected
    /// while no source token is selected.
    pub fn set_source_amount(&mut self, input: &str) -> Result<&str, SwapError> {
        if self.source.is_none() {
            return Err(SwapError::ActionNotAllowed {
                reason: "select a source token first".to_string(),
            });
        }

        self.source_amount = self.fit_source_amount(&sanitize_numeric_input(input));
        self.recompute();
        Ok(&self.source_amount)
    }

    /// Exchange source and destination token/amount pairs.
    ///
    /// Amounts move as typed. The old source text becomes the destination
    /// amount verbatim (`"1"` stays `"1"`), and derivation resumes on the next
    /// amount or token change.
    pub fn reverse(&mut self) {
        tracing::debug!("reversing swap direction");
        self.exchange_sides();
    }

    /// Apply an edit of the custom slippage field.
    ///
    /// The text is sanitized like any numeric field first (`"5%"` reads as
    /// `5`). Accepted values are committed with auto mode cleared; an emptied
    /// field commits nothing; rejections leave the state untouched.
    pub fn set_custom_slippage(&mut self, text: &str) -> Result<SlippageEdit, SlippageError> {
        let text = sanitize_numeric_input(text);
        match validate_custom_slippage(&text, &self.config) {
            Ok(SlippageEdit::Accepted(value)) => {
                self.commit_slippage(value, false);
                Ok(SlippageEdit::Accepted(value))
            }
            Ok(SlippageEdit::Cleared) => Ok(SlippageEdit::Cleared),
            Err(e) => {
                tracing::info!(input = %text, reason = e.error_code(), "custom slippage rejected");
                Err(e)
            }
        }
    }

    /// Commit a preset value with auto mode cleared
    pub fn set_preset_slippage(&mut self, value: f64) -> Result<(), SlippageError> {
        let value = check_bounds(value, &self.config)?;
        self.commit_slippage(value, false);
        Ok(())
    }

    /// Return to the configured default in auto mode
    pub fn set_auto_slippage(&mut self) {
        self.commit_slippage(self.config.default_slippage, true);
    }

    pub fn slippage_label(&self) -> String {
        slippage_label(self.slippage, self.auto_slippage)
    }

    /// USD display value of one side
    pub fn usd_value(&self, side: SwapSide) -> String {
        side_usd_value(&self.catalog, self.token(side), self.amount(side))
    }

    /// `1 SRC ≈ rate DST`, when both tokens and a positive amount are set
    pub fn rate_line(&self) -> Option<String> {
        exchange_rate_line(
            self.source(),
            self.destination(),
            &self.source_amount,
            &self.destination_amount,
        )
    }

    /// Both tokens chosen and a positive source amount entered
    pub fn is_ready(&self) -> bool {
        self.source.is_some()
            && self.destination.is_some()
            && positive_amount(&self.source_amount).is_some()
    }

    fn commit_slippage(&mut self, value: f64, auto: bool) {
        tracing::debug!(slippage = value, auto, "slippage updated");
        self.slippage = value;
        self.auto_slippage = auto;
    }

    fn fit_source_amount(&self, amount: &str) -> String {
        match &self.source {
            Some(token) => truncate_decimals(amount, usize::from(token.decimals)),
            None => amount.to_string(),
        }
    }

    /// Literal exchange of both pairs. Only a destination that could not be
    /// derived from the new source side is cleared.
    fn exchange_sides(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
        std::mem::swap(&mut self.source_amount, &mut self.destination_amount);

        let derived = derive_destination_amount(
            &self.catalog,
            self.source(),
            self.destination(),
            &self.source_amount,
        );
        if derived.is_empty() {
            self.destination_amount.clear();
        }
    }

    fn recompute(&mut self) {
        self.destination_amount = derive_destination_amount(
            &self.catalog,
            self.source(),
            self.destination(),
            &self.source_amount,
        );
    }
}
