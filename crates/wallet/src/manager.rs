//! Wallet connection state machine
//!
//! `disconnected -> connecting -> connected -> disconnected`. Connected state
//! is written to the store on every change and removed on disconnect. Store
//! failures are logged and never surface to the caller.
//!
//! `connecting` lasts only as long as its [`PendingConnect`] token. Dropping
//! the token, or the future awaiting it, returns the wallet to
//! `disconnected`.

use std::sync::{Arc, Weak};
use std::time::Duration;

use merlin_core::{WalletConfig, WalletError};

use crate::generator::AddressGenerator;
use crate::state::{ConnectionStatus, WalletState};
use crate::storage::{decode_persisted, KeyValueStore, PersistedWallet};

/// Token for an in-flight connect; redeem with
/// [`WalletManager::complete_connect`] once `delay` has elapsed
#[derive(Debug)]
#[must_use]
pub struct PendingConnect {
    delay: Duration,
    attempt: Arc<()>,
}

impl PendingConnect {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Owns the wallet state and its persistence
pub struct WalletManager {
    config: WalletConfig,
    store: Box<dyn KeyValueStore>,
    generator: Box<dyn AddressGenerator>,
    state: WalletState,
    /// Live while the matching `PendingConnect` exists
    attempt: Weak<()>,
}

impl WalletManager {
    /// Load persisted state; anything but a valid connected entry starts
    /// disconnected, and a malformed entry is removed
    pub fn restore(
        config: WalletConfig,
        mut store: Box<dyn KeyValueStore>,
        generator: Box<dyn AddressGenerator>,
    ) -> Self {
        let raw = match store.get(&config.storage_key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %config.storage_key, error = %e, "failed to read wallet state");
                None
            }
        };

        let state = match decode_persisted(raw.as_deref()) {
            PersistedWallet::Valid(state) => {
                if let Some(address) = state.address.as_ref().filter(|a| !a.is_evm_format()) {
                    tracing::warn!(address = %address, "restored address is not a 0x hex address");
                }
                tracing::info!(
                    address = state.address.as_ref().map(|a| a.as_str()).unwrap_or_default(),
                    chain_id = ?state.chain_id,
                    "restored connected wallet"
                );
                state
            }
            PersistedWallet::Absent => WalletState::disconnected(),
            PersistedWallet::Malformed { reason } => {
                tracing::warn!(key = %config.storage_key, %reason, "discarding malformed wallet state");
                if let Err(e) = store.remove(&config.storage_key) {
                    tracing::warn!(key = %config.storage_key, error = %e, "failed to remove wallet state");
                }
                WalletState::disconnected()
            }
        };

        Self {
            config,
            store,
            generator,
            state,
            attempt: Weak::new(),
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.state.is_connected {
            ConnectionStatus::Connected
        } else if self.attempt.strong_count() > 0 {
            ConnectionStatus::Connecting
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Enter `connecting`. Only allowed from `disconnected`.
    pub fn begin_connect(&mut self) -> Result<PendingConnect, WalletError> {
        if self.status() != ConnectionStatus::Disconnected {
            return Err(self.invalid("connect"));
        }

        let attempt = Arc::new(());
        self.attempt = Arc::downgrade(&attempt);
        tracing::debug!(delay_ms = self.config.connect_delay_ms, "wallet connecting");
        Ok(PendingConnect {
            delay: self.config.connect_delay(),
            attempt,
        })
    }

    /// Finish a connect: fabricate an address, report the configured chain
    /// and persist
    pub fn complete_connect(&mut self, pending: PendingConnect) -> Result<&WalletState, WalletError> {
        let current = self.status() == ConnectionStatus::Connecting
            && Weak::ptr_eq(&self.attempt, &Arc::downgrade(&pending.attempt));
        if !current {
            return Err(self.invalid("complete connect"));
        }

        let address = self.generator.generate();
        tracing::info!(address = %address, chain_id = self.config.chain_id, "wallet connected");

        self.state = WalletState::connected(address, self.config.chain_id);
        self.attempt = Weak::new();
        self.persist();
        Ok(&self.state)
    }

    /// Abandon an in-flight connect. Same as dropping `pending`.
    pub fn cancel_connect(&mut self, pending: PendingConnect) {
        drop(pending);
        tracing::debug!(status = %self.status(), "wallet connect cancelled");
    }

    /// Connect with the simulated delay
    pub async fn connect(&mut self) -> Result<&WalletState, WalletError> {
        let pending = self.begin_connect()?;
        tokio::time::sleep(pending.delay()).await;
        self.complete_connect(pending)
    }

    /// Clear all wallet fields and drop the persisted entry.
    ///
    /// No-op when already disconnected; rejected while a connect is pending.
    pub fn disconnect(&mut self) -> Result<(), WalletError> {
        match self.status() {
            ConnectionStatus::Disconnected => Ok(()),
            ConnectionStatus::Connecting => Err(self.invalid("disconnect")),
            ConnectionStatus::Connected => {
                tracing::info!("wallet disconnected");
                self.state = WalletState::disconnected();
                self.persist();
                Ok(())
            }
        }
    }

    fn invalid(&self, action: &'static str) -> WalletError {
        WalletError::InvalidTransition {
            status: self.status().as_str(),
            action,
        }
    }

    fn persist(&mut self) {
        let key = &self.config.storage_key;
        let result = if self.state.is_connected {
            match serde_json::to_string(&self.state) {
                Ok(json) => self.store.set(key, &json),
                Err(e) => Err(e.into()),
            }
        } else {
            self.store.remove(key)
        };

        if let Err(e) = result {
            tracing::warn!(key = %key, error = %e, "failed to persist wallet state");
        }
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager")
            .field("status", &self.status())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{RandomAddressGenerator, StaticAddress};
    use crate::storage::{FileStore, MemoryStore};
    use merlin_core::{Address, StorageError};
    use std::sync::{Arc, Mutex};

    const KEY: &str = "merlin_swap_wallet";

    /// Memory store whose contents stay inspectable after being boxed
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.lock().unwrap().get(key)
        }
        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().set(key, value)
        }
        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().remove(key)
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::other("read failed").into())
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("write failed").into())
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("remove failed").into())
        }
    }

    fn manager(store: impl KeyValueStore + 'static) -> WalletManager {
        WalletManager::restore(
            WalletConfig::default(),
            Box::new(store),
            Box::new(RandomAddressGenerator),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_fabricates_address_after_delay() {
        let mut wallet = manager(MemoryStore::new());
        assert!(!wallet.state().is_connected);
        assert_eq!(wallet.status(), ConnectionStatus::Disconnected);

        let started = tokio::time::Instant::now();
        let state = wallet.connect().await.unwrap().clone();

        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(state.is_connected);
        assert!(state.address.as_ref().unwrap().is_evm_format());
        assert_eq!(state.chain_id, Some(56));
        assert_eq!(wallet.status(), ConnectionStatus::Connected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connecting_is_observable() {
        let mut wallet = manager(MemoryStore::new());
        let pending = wallet.begin_connect().unwrap();

        assert_eq!(wallet.status(), ConnectionStatus::Connecting);
        assert!(!wallet.state().is_connected);
        assert!(wallet.begin_connect().is_err());
        assert_eq!(
            wallet.disconnect().unwrap_err().to_string(),
            "Cannot disconnect while connecting"
        );

        tokio::time::sleep(pending.delay()).await;
        wallet.complete_connect(pending).unwrap();
        assert_eq!(wallet.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_dropped_pending_connect_returns_to_disconnected() {
        let store = SharedStore::default();
        let mut wallet = manager(store.clone());

        let pending = wallet.begin_connect().unwrap();
        assert_eq!(wallet.status(), ConnectionStatus::Connecting);
        drop(pending);
        assert_eq!(wallet.status(), ConnectionStatus::Disconnected);
        assert_eq!(store.get(KEY).unwrap(), None);

        let pending = wallet.begin_connect().unwrap();
        wallet.cancel_connect(pending);
        assert_eq!(wallet.status(), ConnectionStatus::Disconnected);
        wallet.disconnect().unwrap();

        let pending = wallet.begin_connect().unwrap();
        wallet.complete_connect(pending).unwrap();
        assert_eq!(wallet.status(), ConnectionStatus::Connected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_out_connect_can_be_retried() {
        let mut wallet = manager(MemoryStore::new());

        let timed_out = tokio::time::timeout(Duration::from_millis(100), wallet.connect()).await;
        assert!(timed_out.is_err());
        assert_eq!(wallet.status(), ConnectionStatus::Disconnected);
        assert!(!wallet.state().is_connected);

        wallet.connect().await.unwrap();
        assert_eq!(wallet.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_stale_pending_connect_is_rejected() {
        let mut first = manager(MemoryStore::new());
        let mut second = manager(MemoryStore::new());
        let foreign = second.begin_connect().unwrap();
        let _own = first.begin_connect().unwrap();

        let err = first.complete_connect(foreign).unwrap_err();
        assert_eq!(err.to_string(), "Cannot complete connect while connecting");
        assert_eq!(first.status(), ConnectionStatus::Connecting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_while_connected_is_rejected() {
        let mut wallet = manager(MemoryStore::new());
        wallet.connect().await.unwrap();
        let before = wallet.state().clone();

        let err = wallet.connect().await.unwrap_err();
        assert_eq!(err.error_code(), "invalid_transition");
        assert_eq!(err.to_string(), "Cannot connect while connected");
        assert_eq!(wallet.state(), &before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_persists_and_disconnect_removes() {
        let store = SharedStore::default();
        let mut wallet = manager(store.clone());

        wallet.connect().await.unwrap();
        let raw = store.get(KEY).unwrap().unwrap();
        let persisted: WalletState = serde_json::from_str(&raw).unwrap();
        assert_eq!(&persisted, wallet.state());

        wallet.disconnect().unwrap();
        assert_eq!(wallet.state(), &WalletState::disconnected());
        assert_eq!(store.get(KEY).unwrap(), None);

        // Second disconnect is a no-op
        wallet.disconnect().unwrap();
        assert_eq!(wallet.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_restore_connected_entry() {
        let mut store = MemoryStore::new();
        store
            .set(KEY, r#"{"isConnected":true,"address":"0x00000000000000000000000000000000000000aa","chainId":56}"#)
            .unwrap();

        let wallet = manager(store);
        assert_eq!(wallet.status(), ConnectionStatus::Connected);
        assert_eq!(
            wallet.state().address.as_ref().unwrap().shortened(),
            "0x0000...00aa"
        );
    }

    #[test]
    fn test_restore_discards_malformed_entry() {
        let store = SharedStore::default();
        store.clone().set(KEY, "{broken").unwrap();

        let wallet = manager(store.clone());
        assert_eq!(wallet.status(), ConnectionStatus::Disconnected);
        assert_eq!(store.get(KEY).unwrap(), None);

        store
            .clone()
            .set(KEY, r#"{"isConnected":false,"address":null,"chainId":null}"#)
            .unwrap();
        let wallet = manager(store.clone());
        assert!(!wallet.state().is_connected);
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_storage_failures_are_not_fatal() {
        let mut wallet = manager(BrokenStore);
        assert!(!wallet.state().is_connected);

        wallet.connect().await.unwrap();
        assert!(wallet.state().is_connected);
        wallet.disconnect().unwrap();
        assert!(!wallet.state().is_connected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_file_store_session_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        let address = Address::new("0x1111111111111111111111111111111111111111");

        let mut wallet = WalletManager::restore(
            WalletConfig::default(),
            Box::new(FileStore::open(&path).unwrap()),
            Box::new(StaticAddress(address.clone())),
        );
        wallet.connect().await.unwrap();
        drop(wallet);

        let restored = manager(FileStore::open(&path).unwrap());
        assert_eq!(restored.status(), ConnectionStatus::Connected);
        assert_eq!(restored.state().address.as_ref(), Some(&address));
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_chain_and_delay() {
        let config = WalletConfig {
            chain_id: 97,
            connect_delay_ms: 1200,
            ..WalletConfig::default()
        };
        let mut wallet = WalletManager::restore(
            config,
            Box::new(MemoryStore::new()),
            Box::new(RandomAddressGenerator),
        );

        let pending = wallet.begin_connect().unwrap();
        assert_eq!(pending.delay(), Duration::from_millis(1200));
        tokio::time::sleep(pending.delay()).await;
        let state = wallet.complete_connect(pending).unwrap();
        assert_eq!(state.chain_id, Some(97));
    }
}
