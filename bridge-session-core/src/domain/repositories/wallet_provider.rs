//! Wallet provider ports
//!
//! The session core never talks to a wallet SDK directly. Each chain family
//! exposes the single network query login needs; adapters for real wallets
//! live in the embedding application.

use async_trait::async_trait;

use crate::domain::entities::network::{EvmNetwork, ExtensionNetwork};
use crate::shared::error::SessionError;

/// Ethereum-style provider (MetaMask, Binance wallet, Coinbase, EVM wallet-connect)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvmProvider: Send + Sync {
    /// Current network, or `None` if the provider reports nothing
    async fn get_network(&self) -> Result<Option<EvmNetwork>, SessionError>;
}

/// Terra browser extension
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TerraExtension: Send + Sync {
    async fn info(&self) -> Result<ExtensionNetwork, SessionError>;
}

/// Cosmos-style offline signer (Keplr)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IbcSigner: Send + Sync {
    async fn get_chain_id(&self) -> Result<Option<String>, SessionError>;
}

/// Terra wallet-connect session
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletConnectSession: Send + Sync {
    /// Chain id negotiated for the session, absent until the peer reports one
    fn chain_id(&self) -> Option<u64>;

    async fn kill_session(&self) -> Result<(), SessionError>;
}
