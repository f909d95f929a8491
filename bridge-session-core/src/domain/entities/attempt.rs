//! Record of a login rejected for an unsupported network

use serde::{Deserialize, Serialize};

use crate::shared::types::{BlockChain, ChainFamily, RawChainId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// The wallet reported a network the registry does not list.
    UnknownNetwork,
    /// The wallet reported no usable network information.
    MissingNetworkInfo,
}

/// Failed resolution, as returned by a resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnsupportedNetwork {
    pub family: ChainFamily,
    /// Chain shown to the user in the rejection message
    pub chain: BlockChain,
    pub name: Option<String>,
    pub chain_id: Option<RawChainId>,
    pub reason: UnsupportedReason,
}

impl UnsupportedNetwork {
    pub fn unknown(
        family: ChainFamily,
        chain: BlockChain,
        name: Option<String>,
        chain_id: Option<RawChainId>,
    ) -> Self {
        Self {
            family,
            chain,
            name,
            chain_id,
            reason: UnsupportedReason::UnknownNetwork,
        }
    }

    pub fn missing_info(family: ChainFamily, chain: BlockChain) -> Self {
        Self {
            family,
            chain,
            name: None,
            chain_id: None,
            reason: UnsupportedReason::MissingNetworkInfo,
        }
    }
}

/// Rejected attempt kept in session state until the next login starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnsupportedNetworkAttempt {
    pub family: ChainFamily,
    pub chain: BlockChain,
    pub name: Option<String>,
    pub chain_id: Option<RawChainId>,
    pub reason: UnsupportedReason,
    pub attempted_at: chrono::DateTime<chrono::Utc>,
}

impl From<UnsupportedNetwork> for UnsupportedNetworkAttempt {
    fn from(unsupported: UnsupportedNetwork) -> Self {
        Self {
            family: unsupported.family,
            chain: unsupported.chain,
            name: unsupported.name,
            chain_id: unsupported.chain_id,
            reason: unsupported.reason,
            attempted_at: chrono::Utc::now(),
        }
    }
}
