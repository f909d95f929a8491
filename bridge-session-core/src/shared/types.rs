use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SessionError;

// Chain identifiers - the stable keys persisted between sessions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BlockChain {
    Ethereum,
    Bsc,
    Harmony,
    Terra,
    Osmo,
    Scrt,
    Inj,
    Axelar,
    Cosmos,
}

impl BlockChain {
    pub const ALL: [BlockChain; 9] = [
        BlockChain::Ethereum,
        BlockChain::Bsc,
        BlockChain::Harmony,
        BlockChain::Terra,
        BlockChain::Osmo,
        BlockChain::Scrt,
        BlockChain::Inj,
        BlockChain::Axelar,
        BlockChain::Cosmos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockChain::Ethereum => "ethereum",
            BlockChain::Bsc => "bsc",
            BlockChain::Harmony => "harmony",
            BlockChain::Terra => "terra",
            BlockChain::Osmo => "osmo",
            BlockChain::Scrt => "scrt",
            BlockChain::Inj => "inj",
            BlockChain::Axelar => "axelar",
            BlockChain::Cosmos => "cosmos",
        }
    }

    pub fn family(&self) -> ChainFamily {
        match self {
            BlockChain::Ethereum | BlockChain::Bsc | BlockChain::Harmony => ChainFamily::Evm,
            BlockChain::Terra => ChainFamily::Native,
            BlockChain::Osmo
            | BlockChain::Scrt
            | BlockChain::Inj
            | BlockChain::Axelar
            | BlockChain::Cosmos => ChainFamily::Ibc,
        }
    }
}

impl fmt::Display for BlockChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockChain {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockChain::ALL
            .iter()
            .copied()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| SessionError::validation(format!("Unknown blockchain: {}", s)))
    }
}

/// Wallet-connection protocol and network-identification scheme shared by a group of chains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    /// Numeric chain ids reported by an ethereum-style provider.
    Evm,
    /// Terra: named networks via the browser extension, numeric ids via wallet-connect.
    Native,
    /// String chain ids reported by a cosmos-style signer.
    Ibc,
}

impl ChainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainFamily::Evm => "evm",
            ChainFamily::Native => "native",
            ChainFamily::Ibc => "ibc",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NetworkEnvironment {
    Mainnet,
    Testnet,
}

impl NetworkEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkEnvironment::Mainnet => "mainnet",
            NetworkEnvironment::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkEnvironment {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(NetworkEnvironment::Mainnet),
            "testnet" => Ok(NetworkEnvironment::Testnet),
            other => Err(SessionError::validation(format!("Unknown network environment: {}", other))),
        }
    }
}

// Wallet types - persisted by their variant name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WalletType {
    Binance,
    MetaMask,
    WalletConnect,
    CoinbaseWallet,
    TerraExtension,
    TerraWalletConnect,
    Keplr,
}

impl WalletType {
    pub const ALL: [WalletType; 7] = [
        WalletType::Binance,
        WalletType::MetaMask,
        WalletType::WalletConnect,
        WalletType::CoinbaseWallet,
        WalletType::TerraExtension,
        WalletType::TerraWalletConnect,
        WalletType::Keplr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WalletType::Binance => "Binance",
            WalletType::MetaMask => "MetaMask",
            WalletType::WalletConnect => "WalletConnect",
            WalletType::CoinbaseWallet => "CoinbaseWallet",
            WalletType::TerraExtension => "TerraExtension",
            WalletType::TerraWalletConnect => "TerraWalletConnect",
            WalletType::Keplr => "Keplr",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletType {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletType::ALL
            .iter()
            .copied()
            .find(|wallet| wallet.as_str() == s)
            .ok_or_else(|| SessionError::validation(format!("Unknown wallet type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BridgeType {
    Shuttle,
    Ibc,
    Axelar,
    Wormhole,
}

impl BridgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeType::Shuttle => "shuttle",
            BridgeType::Ibc => "ibc",
            BridgeType::Axelar => "axelar",
            BridgeType::Wormhole => "wormhole",
        }
    }
}

impl fmt::Display for BridgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeType {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shuttle" => Ok(BridgeType::Shuttle),
            "ibc" => Ok(BridgeType::Ibc),
            "axelar" => Ok(BridgeType::Axelar),
            "wormhole" => Ok(BridgeType::Wormhole),
            other => Err(SessionError::validation(format!("Unknown bridge type: {}", other))),
        }
    }
}

/// Progress of the transfer form that follows a login.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProcessStatus {
    #[default]
    Input,
    Confirm,
    Submit,
    Done,
    Failed,
}

/// Chain id as reported by a wallet: numeric for EVM and wallet-connect, text for the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawChainId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for RawChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawChainId::Numeric(id) => write!(f, "{}", id),
            RawChainId::Text(id) => f.write_str(id),
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blockchain_round_trips_through_str() {
        for chain in BlockChain::ALL {
            assert_eq!(chain.as_str().parse::<BlockChain>().unwrap(), chain);
        }
        assert!("solana".parse::<BlockChain>().is_err());
    }

    #[test]
    fn test_blockchain_families() {
        assert_eq!(BlockChain::Ethereum.family(), ChainFamily::Evm);
        assert_eq!(BlockChain::Bsc.family(), ChainFamily::Evm);
        assert_eq!(BlockChain::Harmony.family(), ChainFamily::Evm);
        assert_eq!(BlockChain::Terra.family(), ChainFamily::Native);
        assert_eq!(BlockChain::Osmo.family(), ChainFamily::Ibc);
        assert_eq!(BlockChain::Cosmos.family(), ChainFamily::Ibc);
    }

    #[test]
    fn test_wallet_type_names() {
        assert_eq!(WalletType::TerraWalletConnect.to_string(), "TerraWalletConnect");
        assert_eq!("Keplr".parse::<WalletType>().unwrap(), WalletType::Keplr);
        assert!("".parse::<WalletType>().is_err());
    }

    #[test]
    fn test_serde_uses_persisted_names() {
        let json = serde_json::to_string(&BlockChain::Harmony).unwrap();
        assert_eq!(json, "\"harmony\"");
        let raw: RawChainId = serde_json::from_str("56").unwrap();
        assert_eq!(raw, RawChainId::Numeric(56));
    }

    #[test]
    fn test_process_status_default() {
        assert_eq!(ProcessStatus::default(), ProcessStatus::Input);
    }
}
