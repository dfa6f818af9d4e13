//! Merlin Swap application library
//!
//! Bootstraps the shared [`AppState`] and exposes the commands a front-end
//! shell invokes.

pub mod commands;

use std::path::Path;

use anyhow::Context;
use merlin_api::AppState;
use merlin_core::AppConfig;
use swap::TokenCatalog;
use tracing_subscriber::EnvFilter;
use wallet::{FileStore, KeyValueStore, MemoryStore, RandomAddressGenerator, WalletManager};

/// Log filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "merlin=debug,swap=debug,wallet=debug,info";

/// Install the fmt subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::info!("Starting Merlin Swap");
    }
}

/// Load configuration and build the application state.
///
/// An explicit `config_path` wins over `MERLIN_CONFIG`; with neither the
/// defaults apply.
pub fn bootstrap(config_path: Option<&Path>) -> anyhow::Result<AppState> {
    let config = match config_path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::from_env().context("failed to load config from environment")?,
    };
    Ok(build_state(config))
}

/// Build the state for an already validated config
pub fn build_state(config: AppConfig) -> AppState {
    let store = open_store(&config);
    let wallet = WalletManager::restore(
        config.wallet.clone(),
        store,
        Box::new(RandomAddressGenerator),
    );

    tracing::debug!(
        slippage = config.swap.default_slippage,
        chain_id = config.wallet.chain_id,
        "application state ready"
    );
    AppState::new(config, TokenCatalog::builtin(), wallet)
}

/// File store when configured, memory otherwise. An unusable file falls back
/// to memory so the session still starts.
fn open_store(config: &AppConfig) -> Box<dyn KeyValueStore> {
    let Some(path) = &config.storage.path else {
        return Box::new(MemoryStore::new());
    };

    match FileStore::open(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "falling back to in-memory storage");
            Box::new(MemoryStore::new())
        }
    }
}
