//! Login user entity
//!
//! The authenticated session subject. Holds the wallet connection handle,
//! so it does not implement Serialize; persisted selections go through
//! the storage layer instead.

use std::fmt;
use std::sync::Arc;

use crate::domain::repositories::wallet_provider::{
    EvmProvider, IbcSigner, TerraExtension, WalletConnectSession,
};
use crate::shared::types::WalletType;

/// Family-specific handle onto the connected wallet
#[derive(Clone)]
pub enum WalletConnection {
    Evm(Arc<dyn EvmProvider>),
    TerraExtension(Arc<dyn TerraExtension>),
    TerraWalletConnect(Arc<dyn WalletConnectSession>),
    Ibc(Arc<dyn IbcSigner>),
}

impl WalletConnection {
    pub fn kind(&self) -> &'static str {
        match self {
            WalletConnection::Evm(_) => "evm-provider",
            WalletConnection::TerraExtension(_) => "terra-extension",
            WalletConnection::TerraWalletConnect(_) => "terra-walletconnect",
            WalletConnection::Ibc(_) => "ibc-signer",
        }
    }
}

impl fmt::Debug for WalletConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

#[derive(Debug, Clone)]
pub struct LoginUser {
    pub address: String,
    pub wallet_type: WalletType,
    pub connection: WalletConnection,
    pub logged_in_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl LoginUser {
    pub fn new(address: impl Into<String>, wallet_type: WalletType, connection: WalletConnection) -> Self {
        Self {
            address: address.into(),
            wallet_type,
            connection,
            logged_in_at: None,
        }
    }

    /// The wallet-connect session to tear down on logout, if any
    pub fn wallet_connect_session(&self) -> Option<Arc<dyn WalletConnectSession>> {
        match &self.connection {
            WalletConnection::TerraWalletConnect(session) => Some(Arc::clone(session)),
            _ => None,
        }
    }
}
