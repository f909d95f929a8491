//! Session state store
//!
//! Holds the logged-in user, the per-family network slots, the chain
//! selection, the unsupported-network modal state and the transfer form
//! status. Observers subscribe to [`SessionEvent`]s.
//!
//! A login writes the network slot and then the user, under one lock. The
//! user can only be set by committing the [`StagedLogin`] returned by
//! [`SessionState::stage_login`], so anything reacting to
//! [`SessionEvent::LoggedIn`] sees consistent network state.
//!
//! Every login attempt gets an [`AttemptId`]. Only the most recently
//! started attempt may write; a logout also invalidates attempts in flight.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;

use crate::core::resolver::ResolvedNetwork;
use crate::domain::entities::attempt::{UnsupportedNetwork, UnsupportedNetworkAttempt};
use crate::domain::entities::network::{EvmNetwork, ExtensionNetwork, IbcNetwork, LocalNetworkConfig};
use crate::domain::entities::user::LoginUser;
use crate::shared::constants::EVENT_CHANNEL_CAPACITY;
use crate::shared::types::{BlockChain, ChainFamily, ProcessStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    AttemptStarted(AttemptId),
    NetworkUpdated(ChainFamily),
    SelectionChanged { from: BlockChain, to: BlockChain },
    LoggedIn { chain: BlockChain, address: String },
    UnsupportedNetwork(UnsupportedNetworkAttempt),
    ProcessStatusChanged(ProcessStatus),
    LoggedOut,
}

struct Inner {
    latest_attempt: u64,
    login_user: Option<LoginUser>,
    from_chain: BlockChain,
    to_chain: BlockChain,
    ether_ext: Option<EvmNetwork>,
    terra_ext: Option<ExtensionNetwork>,
    terra_local: &'static LocalNetworkConfig,
    keplr_ext: Option<IbcNetwork>,
    unsupported_modal_visible: bool,
    tried_unsupported: Option<UnsupportedNetworkAttempt>,
    process_status: ProcessStatus,
}

impl Inner {
    fn is_current(&self, attempt: AttemptId) -> bool {
        attempt.0 == self.latest_attempt
    }
}

pub struct SessionState {
    inner: RwLock<Inner>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionState {
    pub fn new(from_chain: BlockChain, to_chain: BlockChain, terra_local: &'static LocalNetworkConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: RwLock::new(Inner {
                latest_attempt: 0,
                login_user: None,
                from_chain,
                to_chain,
                ether_ext: None,
                terra_ext: None,
                terra_local,
                keplr_ext: None,
                unsupported_modal_visible: false,
                tried_unsupported: None,
                process_status: ProcessStatus::Input,
            }),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    // A panic while holding the lock leaves plain data behind; keep serving it.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    pub fn login_user(&self) -> Option<LoginUser> {
        self.read().login_user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().login_user.is_some()
    }

    pub fn from_chain(&self) -> BlockChain {
        self.read().from_chain
    }

    pub fn to_chain(&self) -> BlockChain {
        self.read().to_chain
    }

    pub fn ether_ext(&self) -> Option<EvmNetwork> {
        self.read().ether_ext.clone()
    }

    pub fn terra_ext(&self) -> Option<ExtensionNetwork> {
        self.read().terra_ext.clone()
    }

    pub fn terra_local(&self) -> &'static LocalNetworkConfig {
        self.read().terra_local
    }

    pub fn keplr_ext(&self) -> Option<IbcNetwork> {
        self.read().keplr_ext.clone()
    }

    pub fn is_unsupported_modal_visible(&self) -> bool {
        self.read().unsupported_modal_visible
    }

    pub fn tried_unsupported(&self) -> Option<UnsupportedNetworkAttempt> {
        self.read().tried_unsupported.clone()
    }

    pub fn process_status(&self) -> ProcessStatus {
        self.read().process_status
    }

    pub fn select_chains(&self, from: BlockChain, to: BlockChain) {
        let mut inner = self.write();
        inner.from_chain = from;
        inner.to_chain = to;
        self.emit(SessionEvent::SelectionChanged { from, to });
    }

    pub fn set_process_status(&self, status: ProcessStatus) {
        let mut inner = self.write();
        inner.process_status = status;
        self.emit(SessionEvent::ProcessStatusChanged(status));
    }

    pub fn hide_unsupported_modal(&self) {
        self.write().unsupported_modal_visible = false;
    }

    /// Start a login attempt, superseding any attempt still in flight.
    pub fn begin_attempt(&self) -> AttemptId {
        let mut inner = self.write();
        inner.latest_attempt += 1;
        inner.unsupported_modal_visible = false;
        inner.tried_unsupported = None;
        let attempt = AttemptId(inner.latest_attempt);
        self.emit(SessionEvent::AttemptStarted(attempt));
        attempt
    }

    pub fn is_current(&self, attempt: AttemptId) -> bool {
        self.read().is_current(attempt)
    }

    /// Record a rejected attempt and raise the modal. `None` if the attempt was superseded.
    ///
    /// A native rejection also replaces the Terra slot with what the wallet reported.
    pub fn reject(&self, attempt: AttemptId, unsupported: UnsupportedNetwork) -> Option<UnsupportedNetworkAttempt> {
        let mut inner = self.write();
        if !inner.is_current(attempt) {
            return None;
        }
        if unsupported.family == ChainFamily::Native {
            // The Terra slot mirrors the report: the raw extension network, or nothing
            inner.terra_ext = unsupported.name.as_ref().map(|name| {
                let chain_id = unsupported.chain_id.as_ref().map(ToString::to_string).unwrap_or_default();
                ExtensionNetwork::new(name.clone(), chain_id)
            });
        }
        let record = UnsupportedNetworkAttempt::from(unsupported);
        inner.unsupported_modal_visible = true;
        inner.tried_unsupported = Some(record.clone());
        self.emit(SessionEvent::UnsupportedNetwork(record.clone()));
        Some(record)
    }

    /// Stage the resolved network for a login. Nothing is written until
    /// [`StagedLogin::commit`] supplies the user.
    ///
    /// `None` if the attempt was already superseded.
    pub fn stage_login(&self, attempt: AttemptId, resolved: ResolvedNetwork) -> Option<StagedLogin<'_>> {
        if !self.is_current(attempt) {
            return None;
        }
        Some(StagedLogin {
            state: self,
            attempt,
            resolved,
        })
    }

    /// Clear the user, the extension slots and the transfer status.
    /// Returns the user that was logged in.
    pub fn reset_for_logout(&self) -> Option<LoginUser> {
        let mut inner = self.write();
        inner.latest_attempt += 1;
        let user = inner.login_user.take();
        inner.process_status = ProcessStatus::Input;
        inner.ether_ext = None;
        inner.terra_ext = None;
        inner.keplr_ext = None;
        self.emit(SessionEvent::LoggedOut);
        user
    }
}

/// A resolved network waiting for its user.
#[must_use = "the login is incomplete until the user is committed"]
pub struct StagedLogin<'a> {
    state: &'a SessionState,
    attempt: AttemptId,
    resolved: ResolvedNetwork,
}

impl StagedLogin<'_> {
    pub fn chain(&self) -> BlockChain {
        self.resolved.chain()
    }

    /// Write the network slot and then the user under one lock. For EVM and
    /// IBC the selected "from" chain follows the resolved chain.
    ///
    /// Returns false, writing nothing, if a newer attempt or a logout got in first.
    pub fn commit(self, mut user: LoginUser) -> bool {
        let mut inner = self.state.write();
        if !inner.is_current(self.attempt) {
            return false;
        }

        let chain = self.resolved.chain();
        match self.resolved {
            ResolvedNetwork::Evm { network, .. } => {
                inner.ether_ext = Some(network);
                if inner.from_chain != chain {
                    log::info!("Wallet is on {}, correcting selection from {}", chain, inner.from_chain);
                    inner.from_chain = chain;
                    self.state.emit(SessionEvent::SelectionChanged {
                        from: chain,
                        to: inner.to_chain,
                    });
                }
            }
            ResolvedNetwork::Native { local, extension } => {
                inner.terra_ext = Some(extension);
                inner.terra_local = local;
            }
            ResolvedNetwork::Ibc { network, .. } => {
                inner.keplr_ext = Some(network);
                inner.from_chain = chain;
            }
        }
        self.state.emit(SessionEvent::NetworkUpdated(chain.family()));

        user.logged_in_at = Some(chrono::Utc::now());
        let address = user.address.clone();
        inner.login_user = Some(user);
        self.state.emit(SessionEvent::LoggedIn { chain, address });
        true
    }
}
