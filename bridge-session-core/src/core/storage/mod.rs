//! Persisted login selections
//!
//! Last-used chains, wallet type and bridge, kept as four independent
//! string entries in a [`KeyValueStore`]. An empty string is the "unset"
//! value; it reads back as `None`, as does anything that no longer parses.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::domain::repositories::storage_repository::KeyValueStore;
use crate::shared::constants::{
    BRIDGE_USED_KEY, LAST_FROM_BLOCKCHAIN_KEY, LAST_TO_BLOCKCHAIN_KEY, LAST_WALLET_TYPE_KEY,
};
use crate::shared::error::SessionError;
use crate::shared::types::{BlockChain, BridgeType, WalletType};

/// Selections restored at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSelection {
    pub last_from_chain: Option<BlockChain>,
    pub last_to_chain: Option<BlockChain>,
    pub last_wallet_type: Option<WalletType>,
    pub bridge_used: Option<BridgeType>,
}

/// What a successful login persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSelection {
    pub chain: BlockChain,
    pub wallet_type: WalletType,
}

pub struct LoginStorage {
    store: Arc<dyn KeyValueStore>,
}

impl LoginStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get_login_storage(&self) -> LastSelection {
        LastSelection {
            last_from_chain: self.read_field(LAST_FROM_BLOCKCHAIN_KEY),
            last_to_chain: self.read_field(LAST_TO_BLOCKCHAIN_KEY),
            last_wallet_type: self.read_field(LAST_WALLET_TYPE_KEY),
            bridge_used: self.read_field(BRIDGE_USED_KEY),
        }
    }

    /// Persist the chain and wallet of a login; `None` clears both.
    pub fn set_login_storage(&self, selection: Option<LoginSelection>) -> Result<(), SessionError> {
        let (chain, wallet_type) = match selection {
            Some(selection) => (selection.chain.as_str(), selection.wallet_type.as_str()),
            None => ("", ""),
        };
        self.store.set_item(LAST_FROM_BLOCKCHAIN_KEY, chain)?;
        self.store.set_item(LAST_WALLET_TYPE_KEY, wallet_type)
    }

    /// Persist the selected chain pair and bridge. Values are taken as given.
    pub fn set_blockchain_storage(
        &self,
        from: BlockChain,
        to: BlockChain,
        bridge_used: Option<BridgeType>,
    ) -> Result<(), SessionError> {
        self.store.set_item(LAST_FROM_BLOCKCHAIN_KEY, from.as_str())?;
        self.store.set_item(LAST_TO_BLOCKCHAIN_KEY, to.as_str())?;
        self.store
            .set_item(BRIDGE_USED_KEY, bridge_used.map(|b| b.as_str()).unwrap_or(""))
    }

    fn read_field<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr<Err = SessionError>,
    {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                log::warn!("Failed to read {} from session storage: {}", key, e);
                return None;
            }
        };
        match raw.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring stored {}: {}", key, e);
                None
            }
        }
    }
}

/// In-process store, for tests and embedders without persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, SessionError> {
            Err(SessionError::storage("unavailable"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
            Err(SessionError::storage("unavailable"))
        }

        fn remove_item(&self, _key: &str) -> Result<(), SessionError> {
            Err(SessionError::storage("unavailable"))
        }
    }

    fn storage() -> (Arc<MemoryStore>, LoginStorage) {
        let store = Arc::new(MemoryStore::new());
        let storage = LoginStorage::new(store.clone());
        (store, storage)
    }

    #[test]
    fn test_empty_store_reads_as_unset() {
        let (_, storage) = storage();
        assert_eq!(storage.get_login_storage(), LastSelection::default());
    }

    #[test]
    fn test_login_storage_round_trip() {
        let (_, storage) = storage();
        let selection = LoginSelection {
            chain: BlockChain::Bsc,
            wallet_type: WalletType::Binance,
        };
        storage.set_login_storage(Some(selection)).unwrap();

        let last = storage.get_login_storage();
        assert_eq!(last.last_from_chain, Some(BlockChain::Bsc));
        assert_eq!(last.last_wallet_type, Some(WalletType::Binance));
        assert_eq!(last.last_to_chain, None);
    }

    #[test]
    fn test_clearing_login_storage_writes_empty_values() {
        let (store, storage) = storage();
        storage
            .set_login_storage(Some(LoginSelection {
                chain: BlockChain::Terra,
                wallet_type: WalletType::TerraExtension,
            }))
            .unwrap();
        storage.set_login_storage(None).unwrap();

        let last = storage.get_login_storage();
        assert_eq!(last.last_from_chain, None);
        assert_eq!(last.last_wallet_type, None);
        assert_eq!(store.get_item(LAST_FROM_BLOCKCHAIN_KEY).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_blockchain_storage_overwrites_pair_and_bridge() {
        let (store, storage) = storage();
        storage
            .set_blockchain_storage(BlockChain::Ethereum, BlockChain::Terra, Some(BridgeType::Shuttle))
            .unwrap();
        storage
            .set_blockchain_storage(BlockChain::Terra, BlockChain::Osmo, None)
            .unwrap();

        let last = storage.get_login_storage();
        assert_eq!(last.last_from_chain, Some(BlockChain::Terra));
        assert_eq!(last.last_to_chain, Some(BlockChain::Osmo));
        assert_eq!(last.bridge_used, None);
        assert_eq!(store.get_item(BRIDGE_USED_KEY).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_unparseable_values_read_as_unset() {
        let (store, storage) = storage();
        store.set_item(LAST_FROM_BLOCKCHAIN_KEY, "solana").unwrap();
        store.set_item(LAST_WALLET_TYPE_KEY, "Phantom").unwrap();
        store.set_item(BRIDGE_USED_KEY, "axelar").unwrap();

        let last = storage.get_login_storage();
        assert_eq!(last.last_from_chain, None);
        assert_eq!(last.last_wallet_type, None);
        assert_eq!(last.bridge_used, Some(BridgeType::Axelar));
    }

    #[test]
    fn test_store_failures() {
        let storage = LoginStorage::new(Arc::new(FailingStore));
        assert_eq!(storage.get_login_storage(), LastSelection::default());
        assert!(matches!(
            storage.set_login_storage(None),
            Err(SessionError::Storage(_))
        ));
    }

    #[test]
    fn test_memory_store_remove() {
        let store = MemoryStore::new();
        store.set_item("k", "v").unwrap();
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }
}
