//! View model builders
//!
//! Pure functions from state to DTOs. Nothing here mutates.

use swap::{format_percent, SwapSide, SwapState, SLIPPAGE_PRESETS};
use wallet::{WalletManager, WalletState};

use crate::dto::{
    ButtonAction, SideView, SlippagePanelResponse, SlippagePreset, SwapButton, SwapViewResponse,
    TabEntry, TabsResponse, TokenDto, TokenRow, TokenSelectorResponse, WalletStatusResponse,
};
use crate::state::{Tab, UiState};

pub const CONNECT_WALLET_LABEL: &str = "Connect Wallet";
pub const ENTER_AMOUNT_LABEL: &str = "Enter an amount";
pub const SWAP_LABEL: &str = "Swap";

pub fn side_view(swap: &SwapState, side: SwapSide) -> SideView {
    let token = swap.token(side);
    SideView {
        side,
        label: side.label().to_string(),
        token: token.map(TokenDto::from),
        amount: swap.amount(side).to_string(),
        usd_value: swap.usd_value(side),
        editable: side == SwapSide::Source && token.is_some(),
    }
}

/// `Connect Wallet` until connected, then `Enter an amount` (disabled) or `Swap`
pub fn swap_button(swap: &SwapState, wallet: &WalletState) -> SwapButton {
    if !wallet.is_connected {
        return SwapButton {
            label: CONNECT_WALLET_LABEL.to_string(),
            enabled: true,
            action: ButtonAction::ConnectWallet,
        };
    }

    let ready = swap.is_ready();
    SwapButton {
        label: (if ready { SWAP_LABEL } else { ENTER_AMOUNT_LABEL }).to_string(),
        enabled: ready,
        action: ButtonAction::Swap,
    }
}

pub fn swap_view(swap: &SwapState, wallet: &WalletState) -> SwapViewResponse {
    SwapViewResponse {
        source: side_view(swap, SwapSide::Source),
        destination: side_view(swap, SwapSide::Destination),
        can_reverse: swap.source().is_some() && swap.destination().is_some(),
        button: swap_button(swap, wallet),
        rate_line: swap.rate_line(),
        slippage_label: swap.slippage_label(),
    }
}

/// Search results for the selector opened on `side`
pub fn token_selector(swap: &SwapState, side: SwapSide, query: &str) -> TokenSelectorResponse {
    let selected = swap.token(side).map(|t| &t.id);
    let excluded = swap.token(side.other()).map(|t| &t.id);

    let rows = swap
        .catalog()
        .search(query)
        .into_iter()
        .map(|token| TokenRow {
            token: TokenDto::from(token),
            selected: selected == Some(&token.id),
            excluded: excluded == Some(&token.id),
        })
        .collect();

    TokenSelectorResponse {
        side,
        query: query.to_string(),
        rows,
    }
}

pub fn slippage_panel(swap: &SwapState, ui: &UiState) -> SlippagePanelResponse {
    let presets = SLIPPAGE_PRESETS
        .iter()
        .map(|&value| SlippagePreset {
            value,
            label: format_percent(value),
            active: !swap.is_auto_slippage() && (swap.slippage() - value).abs() < f64::EPSILON,
        })
        .collect();

    SlippagePanelResponse {
        label: swap.slippage_label(),
        value: swap.slippage(),
        auto: swap.is_auto_slippage(),
        presets,
        draft: ui.slippage_draft.clone(),
        warning: ui.slippage_warning.clone(),
    }
}

pub fn wallet_status(wallet: &WalletManager) -> WalletStatusResponse {
    let state = wallet.state();
    WalletStatusResponse {
        status: wallet.status().to_string(),
        is_connected: state.is_connected,
        address: state.address.as_ref().map(|a| a.to_string()),
        short_address: state.address.as_ref().map(|a| a.shortened()),
        chain_id: state.chain_id,
    }
}

pub fn tabs(active: Tab) -> TabsResponse {
    TabsResponse {
        active,
        tabs: Tab::ALL
            .into_iter()
            .map(|tab| TabEntry {
                tab,
                label: tab.label().to_string(),
                active: tab == active,
                functional: tab.is_functional(),
                placeholder: tab.placeholder().map(str::to_string),
            })
            .collect(),
    }
}
