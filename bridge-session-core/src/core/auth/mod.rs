//! Login session controller
//!
//! Drives one login attempt from wallet query to an authenticated session
//! or an unsupported-network rejection, and handles logout and the
//! persisted selections.
//!
//! The resolver is picked from the family of the chain the user selected,
//! not by probing the wallet. The wallet must then report a supported
//! network within that family.

use std::sync::Arc;

use crate::core::resolver::{resolver_for, ResolvedNetwork};
use crate::core::session::{AttemptId, SessionState};
use crate::core::storage::{LastSelection, LoginSelection, LoginStorage};
use crate::domain::entities::attempt::{UnsupportedNetwork, UnsupportedNetworkAttempt};
use crate::domain::entities::network::{NativeDescriptor, NetworkDescriptor};
use crate::domain::entities::user::{LoginUser, WalletConnection};
use crate::domain::repositories::wallet_provider::WalletConnectSession;
use crate::shared::error::SessionError;
use crate::shared::types::{BlockChain, BridgeType, ChainFamily};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Logged in; carries the chain the wallet resolved to
    Authenticated(BlockChain),
    Rejected(UnsupportedNetworkAttempt),
    /// A newer login or a logout started before this attempt finished
    Superseded,
}

pub struct LoginSessionController {
    state: Arc<SessionState>,
    storage: LoginStorage,
}

impl LoginSessionController {
    pub fn new(state: Arc<SessionState>, storage: LoginStorage) -> Self {
        Self { state, storage }
    }

    pub fn state(&self) -> &Arc<SessionState> {
        &self.state
    }

    /// Log in with a connected wallet.
    ///
    /// Wallet provider failures are returned as errors and leave the
    /// session as it was; an unsupported network is a `Rejected` outcome.
    pub async fn login(&self, user: LoginUser) -> Result<LoginOutcome, SessionError> {
        let attempt = self.state.begin_attempt();
        let selected = self.state.from_chain();
        let family = selected.family();
        log::info!(
            "Login attempt {}: {} wallet ({:?}) on {} [{}]",
            attempt.value(),
            user.wallet_type,
            user.connection,
            selected,
            family
        );

        let descriptor = query_network(&user.connection, selected).await?;
        log::debug!("Attempt {} reported {:?}", attempt.value(), descriptor);

        match resolver_for(family).resolve(&descriptor) {
            Ok(resolved) => Ok(self.commit(attempt, resolved, user)),
            Err(unsupported) => Ok(self.reject(attempt, unsupported)),
        }
    }

    fn commit(&self, attempt: AttemptId, resolved: ResolvedNetwork, user: LoginUser) -> LoginOutcome {
        let Some(staged) = self.state.stage_login(attempt, resolved) else {
            log::debug!("Attempt {} superseded before commit", attempt.value());
            return LoginOutcome::Superseded;
        };

        let chain = staged.chain();
        let wallet_type = user.wallet_type;
        if !staged.commit(user) {
            log::debug!("Attempt {} superseded before commit", attempt.value());
            return LoginOutcome::Superseded;
        }

        if let Err(e) = self.storage.set_login_storage(Some(LoginSelection { chain, wallet_type })) {
            log::warn!("Failed to persist login selection: {}", e);
        }

        log::info!("Attempt {} logged in on {}", attempt.value(), chain);
        LoginOutcome::Authenticated(chain)
    }

    fn reject(&self, attempt: AttemptId, unsupported: UnsupportedNetwork) -> LoginOutcome {
        match self.state.reject(attempt, unsupported) {
            Some(record) => {
                log::warn!(
                    "Attempt {} rejected: unsupported {} network (name {:?}, chain id {:?}, {:?})",
                    attempt.value(),
                    record.family,
                    record.name,
                    record.chain_id.as_ref().map(ToString::to_string),
                    record.reason
                );
                LoginOutcome::Rejected(record)
            }
            None => LoginOutcome::Superseded,
        }
    }

    /// End the session. Local state is reset before this returns; closing a
    /// wallet-connect session runs in the background and its failure is
    /// only logged.
    pub fn logout(&self) {
        let previous = self.state.reset_for_logout();
        if let Err(e) = self.storage.set_login_storage(None) {
            log::warn!("Failed to clear login selection: {}", e);
        }
        if let Some(session) = previous.as_ref().and_then(LoginUser::wallet_connect_session) {
            spawn_session_teardown(session);
        }
        log::info!("Logged out");
    }

    pub fn get_login_storage(&self) -> LastSelection {
        self.storage.get_login_storage()
    }

    pub fn set_login_storage(&self, selection: Option<LoginSelection>) -> Result<(), SessionError> {
        self.storage.set_login_storage(selection)
    }

    pub fn set_blockchain_storage(
        &self,
        from: BlockChain,
        to: BlockChain,
        bridge_used: Option<BridgeType>,
    ) -> Result<(), SessionError> {
        self.storage.set_blockchain_storage(from, to, bridge_used)
    }

    /// Preselect the chain pair saved by a previous session.
    pub fn restore_selection(&self) -> LastSelection {
        let last = self.storage.get_login_storage();
        let from = last.last_from_chain.unwrap_or_else(|| self.state.from_chain());
        let to = match last.last_to_chain {
            Some(to) if to != from => to,
            _ => self.state.to_chain(),
        };
        log::debug!("Restoring selection {} -> {}", from, to);
        self.state.select_chains(from, to);
        last
    }
}

/// Ask the wallet for its network in the shape the selected family expects.
/// A connection of another family yields a descriptor without network info.
async fn query_network(
    connection: &WalletConnection,
    selected: BlockChain,
) -> Result<NetworkDescriptor, SessionError> {
    let descriptor = match selected.family() {
        ChainFamily::Evm => match connection {
            WalletConnection::Evm(provider) => NetworkDescriptor::Evm(provider.get_network().await?),
            _ => NetworkDescriptor::Evm(None),
        },
        ChainFamily::Native => match connection {
            WalletConnection::TerraWalletConnect(session) => {
                NetworkDescriptor::Native(NativeDescriptor::WalletConnect {
                    chain_id: session.chain_id(),
                })
            }
            WalletConnection::TerraExtension(extension) => {
                let info = extension.info().await?;
                NetworkDescriptor::Native(NativeDescriptor::Extension {
                    name: info.name,
                    chain_id: info.chain_id,
                })
            }
            _ => NetworkDescriptor::Native(NativeDescriptor::Unavailable),
        },
        ChainFamily::Ibc => match connection {
            WalletConnection::Ibc(signer) => NetworkDescriptor::Ibc {
                chain: selected,
                chain_id: signer.get_chain_id().await?,
            },
            _ => NetworkDescriptor::Ibc {
                chain: selected,
                chain_id: None,
            },
        },
    };
    Ok(descriptor)
}

fn spawn_session_teardown(session: Arc<dyn WalletConnectSession>) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move {
                if let Err(e) = session.kill_session().await {
                    log::warn!("Failed to close wallet-connect session: {}", e);
                }
            });
        }
        Err(_) => log::warn!("No async runtime available, wallet-connect session left open"),
    }
}
