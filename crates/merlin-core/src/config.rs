//! Configuration types for Merlin Swap

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{constants::BNB_CHAIN_ID, ChainId, Error, Result};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "MERLIN_CONFIG";

/// Slippage tolerance settings (percent values)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Value used in auto mode
    pub default_slippage: f64,
    pub min_slippage: f64,
    pub max_slippage: f64,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            default_slippage: 0.5,
            min_slippage: 0.1,
            max_slippage: 50.0,
        }
    }
}

/// Simulated wallet settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Key of the persisted wallet entry
    pub storage_key: String,

    /// Chain id reported by a fresh connection
    pub chain_id: ChainId,

    /// Simulated connect latency
    pub connect_delay_ms: u64,
}

impl WalletConfig {
    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            storage_key: "merlin_swap_wallet".to_string(),
            chain_id: BNB_CHAIN_ID,
            connect_delay_ms: 500,
        }
    }
}

/// Key-value store location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the store; in-memory when unset
    pub path: Option<PathBuf>,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub swap: SwapConfig,
    pub wallet: WalletConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load from `MERLIN_CONFIG` when set, defaults otherwise
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let swap = &self.swap;
        if swap.min_slippage <= 0.0 || swap.min_slippage > swap.max_slippage {
            return Err(Error::Config(format!(
                "slippage bounds must satisfy 0 < min <= max (min {}, max {})",
                swap.min_slippage, swap.max_slippage
            )));
        }
        if swap.default_slippage < swap.min_slippage || swap.default_slippage > swap.max_slippage {
            return Err(Error::Config(format!(
                "default slippage {} outside [{}, {}]",
                swap.default_slippage, swap.min_slippage, swap.max_slippage
            )));
        }
        if self.wallet.storage_key.is_empty() {
            return Err(Error::Config("wallet storage key is empty".to_string()));
        }
        Ok(())
    }
}
