//! Key-value persistence
//!
//! String values under string keys. The file store keeps every entry in a
//! single JSON object and rewrites the file on each change.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use merlin_core::StorageError;

use crate::state::WalletState;

/// Minimal string key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store; contents are lost on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by one JSON object file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "file store opened");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Decoded persisted wallet entry
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedWallet {
    /// Connected state with an address
    Valid(WalletState),
    /// No entry stored
    Absent,
    /// Entry present but unusable; should be removed
    Malformed { reason: String },
}

/// Decode the raw persisted entry. Never panics.
///
/// Anything other than a connected state with a non-empty address is
/// malformed, since only connected state is ever written.
pub fn decode_persisted(raw: Option<&str>) -> PersistedWallet {
    let Some(raw) = raw else {
        return PersistedWallet::Absent;
    };

    match serde_json::from_str::<WalletState>(raw) {
        Ok(state) if state.is_valid_connection() => PersistedWallet::Valid(state),
        Ok(_) => PersistedWallet::Malformed {
            reason: "entry is not a connected wallet".to_string(),
        },
        Err(e) => PersistedWallet::Malformed {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merlin_core::Address;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn test_file_store_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = FileStore::open(file.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_decode_persisted() {
        assert_eq!(decode_persisted(None), PersistedWallet::Absent);

        let valid = r#"{"isConnected":true,"address":"0xabc","chainId":56}"#;
        assert_eq!(
            decode_persisted(Some(valid)),
            PersistedWallet::Valid(WalletState::connected(Address::new("0xabc"), 56))
        );

        for bad in [
            "{oops",
            "42",
            r#"{"isConnected":false,"address":null,"chainId":null}"#,
            r#"{"isConnected":true,"address":"","chainId":56}"#,
            r#"{"isConnected":true,"address":null,"chainId":56}"#,
        ] {
            assert!(
                matches!(decode_persisted(Some(bad)), PersistedWallet::Malformed { .. }),
                "{bad}"
            );
        }
    }
}
