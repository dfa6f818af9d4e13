//! Merlin Swap wallet simulation
//!
//! Connection state machine with a fabricated address, persisted to a
//! key-value store so a connected session survives restarts.

pub mod generator;
pub mod manager;
pub mod state;
pub mod storage;

// Re-exports
pub use generator::{AddressGenerator, RandomAddressGenerator, StaticAddress};
pub use manager::{PendingConnect, WalletManager};
pub use state::{ConnectionStatus, WalletState};
pub use storage::{decode_persisted, FileStore, KeyValueStore, MemoryStore, PersistedWallet};
