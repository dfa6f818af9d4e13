//! Wallet State Types

use std::fmt;

use serde::{Deserialize, Serialize};

use merlin_core::{Address, ChainId};

/// Connection lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Disconnected,
    /// Connect requested, simulated delay pending
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wallet fields, also the persisted JSON shape
/// (`{"isConnected": true, "address": "0x..", "chainId": 56}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub is_connected: bool,
    pub address: Option<Address>,
    pub chain_id: Option<ChainId>,
}

impl WalletState {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: Address, chain_id: ChainId) -> Self {
        Self {
            is_connected: true,
            address: Some(address),
            chain_id: Some(chain_id),
        }
    }

    /// Connected flag set and a non-empty address present
    pub fn is_valid_connection(&self) -> bool {
        self.is_connected && self.address.as_ref().is_some_and(|a| !a.is_empty())
    }
}
