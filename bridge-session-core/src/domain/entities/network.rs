//! Network entities for the session core
//!
//! What wallets report about their active network, and the static Terra
//! endpoint bundles the registry resolves those reports to.

use serde::{Deserialize, Serialize};

use crate::shared::types::{BlockChain, ChainFamily, NetworkEnvironment};

/// Network reported by an ethereum-style provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvmNetwork {
    pub chain_id: u64,
    pub name: String,
}

impl EvmNetwork {
    pub fn new(chain_id: u64, name: impl Into<String>) -> Self {
        Self {
            chain_id,
            name: name.into(),
        }
    }
}

/// Network reported by the Terra browser extension, or derived from a wallet-connect session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtensionNetwork {
    pub name: String,
    pub chain_id: String,
}

impl ExtensionNetwork {
    pub fn new(name: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain_id: chain_id.into(),
        }
    }
}

/// Chain reported by a cosmos-style signer, labelled with the selected chain's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IbcNetwork {
    pub chain_id: String,
    pub name: String,
}

/// Shuttle bridge contract addresses on Terra, one per EVM-like counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuttleAddresses {
    pub ethereum: &'static str,
    pub bsc: &'static str,
    pub harmony: &'static str,
}

impl ShuttleAddresses {
    pub fn for_chain(&self, chain: BlockChain) -> Option<&'static str> {
        match chain {
            BlockChain::Ethereum => Some(self.ethereum),
            BlockChain::Bsc => Some(self.bsc),
            BlockChain::Harmony => Some(self.harmony),
            _ => None,
        }
    }
}

/// Terra endpoint set for one environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalNetworkConfig {
    pub environment: NetworkEnvironment,
    /// Network name as reported by the extension
    pub name: &'static str,
    pub chain_id: &'static str,
    pub mantle: &'static str,
    pub fcd: &'static str,
    pub lcd: &'static str,
    pub shuttle: ShuttleAddresses,
}

impl LocalNetworkConfig {
    /// Extension view of this environment, used when the wallet could not report one itself.
    pub fn to_extension_network(&self) -> ExtensionNetwork {
        ExtensionNetwork::new(self.name, self.chain_id)
    }
}

/// How the Terra wallet is attached to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeDescriptor {
    Extension { name: String, chain_id: String },
    WalletConnect { chain_id: Option<u64> },
    /// The login carries no Terra connection at all.
    Unavailable,
}

/// Raw network information gathered from a wallet, one shape per chain family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkDescriptor {
    Evm(Option<EvmNetwork>),
    Native(NativeDescriptor),
    Ibc {
        chain: BlockChain,
        chain_id: Option<String>,
    },
}

impl NetworkDescriptor {
    pub fn family(&self) -> ChainFamily {
        match self {
            NetworkDescriptor::Evm(_) => ChainFamily::Evm,
            NetworkDescriptor::Native(_) => ChainFamily::Native,
            NetworkDescriptor::Ibc { .. } => ChainFamily::Ibc,
        }
    }
}
