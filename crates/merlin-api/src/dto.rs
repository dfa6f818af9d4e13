//! Data Transfer Objects handed to the front-end shell

use merlin_core::{ChainId, Token};
use serde::{Deserialize, Serialize};
use swap::SwapSide;

use crate::state::Tab;

/// Token as rendered in the card and the selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub chain: String,
    pub icon: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// "SYM - chain"
    pub display: String,
}

impl From<&Token> for TokenDto {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id.to_string(),
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            chain: token.chain.clone(),
            icon: token.icon.clone(),
            decimals: token.decimals,
            address: token.address.clone(),
            display: token.to_string(),
        }
    }
}

/// One side of the swap card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideView {
    pub side: SwapSide,
    pub label: String,
    pub token: Option<TokenDto>,
    pub amount: String,
    pub usd_value: String,
    pub editable: bool,
}

/// What pressing the main button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    ConnectWallet,
    Swap,
}

/// Main action button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapButton {
    pub label: String,
    pub enabled: bool,
    pub action: ButtonAction,
}

/// Full swap card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapViewResponse {
    pub source: SideView,
    pub destination: SideView,
    pub can_reverse: bool,
    pub button: SwapButton,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_line: Option<String>,
    pub slippage_label: String,
}

/// Token selector row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    pub token: TokenDto,
    /// Token currently on the side being edited
    pub selected: bool,
    /// Token currently on the other side
    pub excluded: bool,
}

/// Token selector modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSelectorResponse {
    pub side: SwapSide,
    pub query: String,
    pub rows: Vec<TokenRow>,
}

/// Slippage preset button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlippagePreset {
    pub value: f64,
    pub label: String,
    pub active: bool,
}

/// Slippage settings panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlippagePanelResponse {
    pub label: String,
    pub value: f64,
    pub auto: bool,
    pub presets: Vec<SlippagePreset>,
    pub draft: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Wallet connector button and account panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletStatusResponse {
    pub status: String,
    pub is_connected: bool,
    pub address: Option<String>,
    pub short_address: Option<String>,
    pub chain_id: Option<ChainId>,
}

/// Result of pressing the main button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Wallet was disconnected; a connect ran instead
    WalletConnected,
    /// Mock swap acknowledged
    Executed,
}

/// Echo of the acknowledged swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapReceipt {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: String,
    pub to_amount: String,
    pub slippage: f64,
}

/// Swap button response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapSubmitResponse {
    pub outcome: SubmitOutcome,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SwapReceipt>,
    pub wallet: WalletStatusResponse,
}

/// Tab bar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabEntry {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
    pub functional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabsResponse {
    pub active: Tab,
    pub tabs: Vec<TabEntry>,
}
