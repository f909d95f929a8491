//! Chain registry lookups
//!
//! Pure functions over the static chain tables in `shared::constants`:
//! display names, the EVM chain id allow-list, Terra network lookup by
//! extension name or wallet-connect id, and per-chain asset lists. Nothing
//! here is mutable, so lookups are safe from any number of concurrent
//! login attempts.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::domain::entities::network::LocalNetworkConfig;
use crate::shared::constants::*;
use crate::shared::types::{BlockChain, ChainFamily, NetworkEnvironment};

/// Mainnet/testnet id pair of one EVM-like chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvmChainIds {
    pub mainnet: u64,
    pub testnet: u64,
}

impl EvmChainIds {
    pub fn for_environment(&self, environment: NetworkEnvironment) -> u64 {
        match environment {
            NetworkEnvironment::Mainnet => self.mainnet,
            NetworkEnvironment::Testnet => self.testnet,
        }
    }
}

lazy_static! {
    static ref EVM_CHAIN_IDS: HashMap<BlockChain, EvmChainIds> = {
        let mut ids = HashMap::new();
        ids.insert(BlockChain::Ethereum, EvmChainIds { mainnet: ETH_MAIN, testnet: ETH_ROPSTEN });
        ids.insert(BlockChain::Bsc, EvmChainIds { mainnet: BSC_MAIN, testnet: BSC_TEST });
        ids.insert(BlockChain::Harmony, EvmChainIds { mainnet: HMY_MAIN, testnet: HMY_TEST });
        ids
    };

    static ref EVM_CHAIN_BY_ID: HashMap<u64, (BlockChain, NetworkEnvironment)> = EVM_CHAIN_IDS
        .iter()
        .flat_map(|(chain, ids)| {
            [
                (ids.mainnet, (*chain, NetworkEnvironment::Mainnet)),
                (ids.testnet, (*chain, NetworkEnvironment::Testnet)),
            ]
        })
        .collect();

    static ref TERRA_NETWORKS_BY_NAME: HashMap<&'static str, &'static LocalNetworkConfig> = {
        let mut networks = HashMap::new();
        networks.insert(TERRA_MAINNET_CONFIG.name, &TERRA_MAINNET_CONFIG);
        networks.insert(TERRA_TESTNET_CONFIG.name, &TERRA_TESTNET_CONFIG);
        networks
    };

    static ref TERRA_NETWORKS_BY_WALLETCONNECT_ID: HashMap<u64, &'static LocalNetworkConfig> = {
        let mut networks = HashMap::new();
        networks.insert(TERRA_WALLETCONNECT_MAINNET, &TERRA_MAINNET_CONFIG);
        networks.insert(TERRA_WALLETCONNECT_TESTNET, &TERRA_TESTNET_CONFIG);
        networks
    };
}

pub fn display_name(chain: BlockChain) -> &'static str {
    match chain {
        BlockChain::Ethereum => "Ethereum",
        BlockChain::Bsc => "BSC",
        BlockChain::Harmony => "Harmony",
        BlockChain::Terra => "Terra",
        BlockChain::Osmo => "Osmosis",
        BlockChain::Scrt => "Secret",
        BlockChain::Inj => "Injective",
        BlockChain::Axelar => "Axelar",
        BlockChain::Cosmos => "Cosmos",
    }
}

/// Ethereum, BSC and Harmony share one wallet protocol.
pub fn is_evm_chain(chain: BlockChain) -> bool {
    chain.family() == ChainFamily::Evm
}

pub fn is_ibc_chain(chain: BlockChain) -> bool {
    chain.family() == ChainFamily::Ibc
}

pub fn evm_chain_ids(chain: BlockChain) -> Option<EvmChainIds> {
    EVM_CHAIN_IDS.get(&chain).copied()
}

/// Canonical chain and environment for a numeric EVM chain id.
pub fn evm_chain_by_id(chain_id: u64) -> Option<(BlockChain, NetworkEnvironment)> {
    EVM_CHAIN_BY_ID.get(&chain_id).copied()
}

pub fn is_supported_evm_chain_id(chain_id: u64) -> bool {
    EVM_CHAIN_BY_ID.contains_key(&chain_id)
}

/// Every allowed EVM chain id, ascending.
pub fn supported_evm_chain_ids() -> Vec<u64> {
    let mut ids: Vec<u64> = EVM_CHAIN_BY_ID.keys().copied().collect();
    ids.sort_unstable();
    ids
}

pub fn terra_network(environment: NetworkEnvironment) -> &'static LocalNetworkConfig {
    match environment {
        NetworkEnvironment::Mainnet => &TERRA_MAINNET_CONFIG,
        NetworkEnvironment::Testnet => &TERRA_TESTNET_CONFIG,
    }
}

/// Look up the network name reported by the Terra extension.
pub fn terra_network_by_name(name: &str) -> Option<&'static LocalNetworkConfig> {
    TERRA_NETWORKS_BY_NAME.get(name).copied()
}

pub fn terra_network_by_walletconnect_id(chain_id: u64) -> Option<&'static LocalNetworkConfig> {
    TERRA_NETWORKS_BY_WALLETCONNECT_ID.get(&chain_id).copied()
}

/// Chain id the registry expects a signer to report for an IBC chain.
pub fn ibc_chain_id(chain: BlockChain) -> Option<&'static str> {
    match chain {
        BlockChain::Osmo => Some(OSMO_CHAIN_ID),
        BlockChain::Scrt => Some(SCRT_CHAIN_ID),
        BlockChain::Inj => Some(INJ_CHAIN_ID),
        BlockChain::Axelar => Some(AXELAR_CHAIN_ID),
        BlockChain::Cosmos => Some(COSMOS_CHAIN_ID),
        _ => None,
    }
}

/// Terra shuttle contract bridging to `chain` in the given environment.
pub fn shuttle_address(environment: NetworkEnvironment, chain: BlockChain) -> Option<&'static str> {
    terra_network(environment).shuttle.for_chain(chain)
}

pub fn whitelist_url(chain: BlockChain) -> Option<&'static str> {
    match chain {
        BlockChain::Terra => Some(TERRA_WHITELIST),
        BlockChain::Ethereum => Some(ETH_WHITELIST),
        BlockChain::Bsc => Some(BSC_WHITELIST),
        BlockChain::Harmony => Some(HMY_WHITELIST),
        _ => None,
    }
}
