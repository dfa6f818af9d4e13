//! Application state shared across commands

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use merlin_core::{AppConfig, SwapError, WalletError};
use serde::{Deserialize, Serialize};
use swap::{SwapState, TokenCatalog};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use wallet::{WalletManager, WalletState};

/// Top-level navigation tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Swap,
    Twap,
    Limit,
    Chart,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Swap, Tab::Twap, Tab::Limit, Tab::Chart];

    pub fn label(self) -> &'static str {
        match self {
            Self::Swap => "Swap",
            Self::Twap => "TWAP",
            Self::Limit => "Limit",
            Self::Chart => "Chart",
        }
    }

    /// Placeholder text for tabs without functionality
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Swap => None,
            Self::Twap => Some("TWAP coming soon..."),
            Self::Limit => Some("Limit orders coming soon..."),
            Self::Chart => Some("Charts coming soon..."),
        }
    }

    pub fn is_functional(self) -> bool {
        self.placeholder().is_none()
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| SwapError::ActionNotAllowed {
                reason: format!("unknown tab '{}'", s),
            })
    }
}

/// Presentation-only state: text the user is typing and the current tab
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Custom slippage field contents
    pub slippage_draft: String,
    /// Message of the last rejected slippage edit
    pub slippage_warning: Option<String>,
    pub active_tab: Tab,
}

impl UiState {
    fn new(default_slippage: f64) -> Self {
        Self {
            slippage_draft: default_slippage.to_string(),
            slippage_warning: None,
            active_tab: Tab::default(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    swap: RwLock<SwapState>,
    wallet: RwLock<WalletManager>,
    ui: RwLock<UiState>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Arc<TokenCatalog>, wallet: WalletManager) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                swap: RwLock::new(SwapState::new(catalog, config.swap.clone())),
                wallet: RwLock::new(wallet),
                ui: RwLock::new(UiState::new(config.swap.default_slippage)),
                config,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub async fn swap(&self) -> RwLockReadGuard<'_, SwapState> {
        self.inner.swap.read().await
    }

    pub async fn swap_mut(&self) -> RwLockWriteGuard<'_, SwapState> {
        self.inner.swap.write().await
    }

    pub async fn wallet(&self) -> RwLockReadGuard<'_, WalletManager> {
        self.inner.wallet.read().await
    }

    pub async fn ui(&self) -> RwLockReadGuard<'_, UiState> {
        self.inner.ui.read().await
    }

    pub async fn ui_mut(&self) -> RwLockWriteGuard<'_, UiState> {
        self.inner.ui.write().await
    }

    /// Snapshot of the wallet fields
    pub async fn wallet_state(&self) -> WalletState {
        self.inner.wallet.read().await.state().clone()
    }

    /// Run the simulated connect.
    ///
    /// `connecting` is committed and the lock released before the delay, so
    /// readers observe the pending state while the connect is in flight.
    /// Dropping the returned future before it resolves leaves the wallet
    /// `disconnected`.
    pub async fn connect_wallet(&self) -> Result<WalletState, WalletError> {
        let pending = self.inner.wallet.write().await.begin_connect()?;

        tokio::time::sleep(pending.delay()).await;

        let mut wallet = self.inner.wallet.write().await;
        let state = wallet.complete_connect(pending)?.clone();
        Ok(state)
    }

    pub async fn disconnect_wallet(&self) -> Result<WalletState, WalletError> {
        let mut wallet = self.inner.wallet.write().await;
        wallet.disconnect()?;
        Ok(wallet.state().clone())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
