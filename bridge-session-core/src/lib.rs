//! Bridge Session Core
//!
//! Wallet login and network reconciliation for a cross-chain bridge client.
//! Given a connected wallet, works out which network it is on, checks it
//! against the supported chains for the selected family (EVM, native Terra
//! or IBC), and either records an authenticated session or an
//! unsupported-network attempt.
//!
//! ## Architecture
//!
//! - **Core**: chain registry, network resolvers, session state, persisted
//!   selections and the login controller
//! - **Domain**: network and user entities, wallet and storage ports
//! - **Infrastructure**: configuration and the file-backed store
//! - **Shared**: common types, constants and the error type
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bridge_session_core::{init_session_core, LoginOutcome};
//! # async fn run(user: bridge_session_core::LoginUser) -> Result<(), bridge_session_core::SessionError> {
//! let core = init_session_core()?;
//! match core.controller().login(user).await? {
//!     LoginOutcome::Authenticated(chain) => println!("logged in on {}", chain),
//!     LoginOutcome::Rejected(attempt) => println!("unsupported network: {:?}", attempt),
//!     LoginOutcome::Superseded => {}
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use crate::core::{
    LastSelection, LoginOutcome, LoginSelection, LoginSessionController, SessionEvent, SessionState,
};
pub use crate::domain::entities::{
    EvmNetwork, ExtensionNetwork, IbcNetwork, LoginUser, UnsupportedNetworkAttempt, WalletConnection,
};
pub use crate::domain::repositories::{
    EvmProvider, IbcSigner, KeyValueStore, TerraExtension, WalletConnectSession,
};
pub use crate::infrastructure::{FileStore, SessionConfig};
pub use crate::shared::error::SessionError;
pub use crate::shared::types::{BlockChain, BridgeType, ChainFamily, NetworkEnvironment, WalletType};

use crate::core::registry;
use crate::core::storage::LoginStorage;

pub use crate::shared::constants::{NAME, VERSION};

/// Initialize logging at the configured level. Later calls are no-ops.
pub fn init(config: &SessionConfig) {
    let result = env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Load configuration from the environment (and `.env`), set up logging and
/// open the file-backed session store.
pub fn init_session_core() -> Result<SessionCore, SessionError> {
    let config = SessionConfig::load()?;
    init(&config);
    SessionCore::with_config(config)
}

/// Session state, persisted selections and the login controller wired together
pub struct SessionCore {
    config: SessionConfig,
    controller: LoginSessionController,
}

impl SessionCore {
    pub fn with_config(config: SessionConfig) -> Result<Self, SessionError> {
        let store = FileStore::new(config.storage_dir())?;
        log::info!("Session storage at {}", store.path().display());
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build on any store and restore the last saved chain selection.
    pub fn with_store(config: SessionConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let state = Arc::new(SessionState::new(
            config.default_from_chain,
            config.default_to_chain,
            registry::terra_network(config.environment),
        ));
        let controller = LoginSessionController::new(state, LoginStorage::new(store));
        controller.restore_selection();
        log::info!(
            "{} {} ready ({} -> {}, terra {})",
            NAME,
            VERSION,
            controller.state().from_chain(),
            controller.state().to_chain(),
            config.environment
        );
        Self { config, controller }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn controller(&self) -> &LoginSessionController {
        &self.controller
    }

    pub fn state(&self) -> &Arc<SessionState> {
        self.controller.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn test_session_core_uses_config_defaults() {
        let config = SessionConfig {
            environment: NetworkEnvironment::Testnet,
            default_from_chain: BlockChain::Bsc,
            ..SessionConfig::default()
        };
        let core = SessionCore::with_store(config, Arc::new(MemoryStore::new()));

        assert_eq!(core.state().from_chain(), BlockChain::Bsc);
        assert_eq!(core.state().to_chain(), BlockChain::Terra);
        assert_eq!(core.state().terra_local().chain_id, "tequila-0004");
        assert!(!core.state().is_logged_in());
    }

    #[test]
    fn test_session_core_restores_saved_selection() {
        let store = Arc::new(MemoryStore::new());
        LoginStorage::new(store.clone())
            .set_blockchain_storage(BlockChain::Terra, BlockChain::Harmony, Some(BridgeType::Shuttle))
            .unwrap();

        let core = SessionCore::with_store(SessionConfig::default(), store);
        assert_eq!(core.state().from_chain(), BlockChain::Terra);
        assert_eq!(core.state().to_chain(), BlockChain::Harmony);
    }

    #[test]
    fn test_session_core_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig {
            storage_dir: Some(dir.path().to_path_buf()),
            ..SessionConfig::default()
        };
        init(&config);

        let core = SessionCore::with_config(config.clone()).unwrap();
        core.controller()
            .set_blockchain_storage(BlockChain::Bsc, BlockChain::Terra, None)
            .unwrap();

        let reopened = SessionCore::with_config(config).unwrap();
        assert_eq!(reopened.state().from_chain(), BlockChain::Bsc);
        assert_eq!(reopened.config().storage_dir(), dir.path());
    }

    #[test]
    fn test_version_info() {
        assert_eq!(NAME, "bridge-session-core");
        assert!(!VERSION.is_empty());
    }
}
