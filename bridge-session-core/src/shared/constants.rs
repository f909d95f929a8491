//! Constants for the session core
//!
//! Chain ids, Terra endpoint bundles, asset lists and storage keys. These
//! tables are the static chain registry; lookups over them live in
//! `core::registry`.

use crate::domain::entities::network::{LocalNetworkConfig, ShuttleAddresses};
use crate::shared::types::NetworkEnvironment;

// EVM chain ids served by the shuttle bridge
// https://chainid.network/
pub const ETH_MAIN: u64 = 1;
pub const ETH_ROPSTEN: u64 = 3;
pub const BSC_MAIN: u64 = 56;
pub const BSC_TEST: u64 = 97;
pub const HMY_MAIN: u64 = 1666600000;
pub const HMY_TEST: u64 = 1666700000;

// Terra chain ids
pub const TERRA_MAINNET_CHAIN_ID: &str = "columbus-4";
pub const TERRA_TESTNET_CHAIN_ID: &str = "tequila-0004";

// Terra wallet-connect chain ids
pub const TERRA_WALLETCONNECT_MAINNET: u64 = 1;
pub const TERRA_WALLETCONNECT_TESTNET: u64 = 0;

// IBC chain ids as reported by the signer
pub const OSMO_CHAIN_ID: &str = "osmosis-1";
pub const SCRT_CHAIN_ID: &str = "secret-4";
pub const INJ_CHAIN_ID: &str = "injective-1";
pub const AXELAR_CHAIN_ID: &str = "axelar-dojo-1";
pub const COSMOS_CHAIN_ID: &str = "cosmoshub-4";

pub static TERRA_MAINNET_CONFIG: LocalNetworkConfig = LocalNetworkConfig {
    environment: NetworkEnvironment::Mainnet,
    name: "mainnet",
    chain_id: TERRA_MAINNET_CHAIN_ID,
    mantle: "https://mantle.terra.dev/",
    fcd: "https://fcd.terra.dev",
    lcd: "https://lcd.terra.dev",
    shuttle: ShuttleAddresses {
        ethereum: "terra13yxhrk08qvdf5zdc9ss5mwsg5sf7zva9xrgwgc",
        bsc: "terra1g6llg3zed35nd3mh9zx6n64tfw3z67w2c48tn2",
        harmony: "terra1rtn03a9l3qsc0a9verxwj00afs93mlm0yr7chk",
    },
};

pub static TERRA_TESTNET_CONFIG: LocalNetworkConfig = LocalNetworkConfig {
    environment: NetworkEnvironment::Testnet,
    name: "testnet",
    chain_id: TERRA_TESTNET_CHAIN_ID,
    mantle: "https://tequila-mantle.terra.dev/",
    fcd: "https://tequila-fcd.terra.dev",
    lcd: "https://tequila-lcd.terra.dev",
    shuttle: ShuttleAddresses {
        ethereum: "terra10a29fyas9768pw8mewdrar3kzr07jz8f3n73t3",
        bsc: "terra1paav7jul3dzwzv78j0k59glmevttnkfgmgzv2r",
        harmony: "terra1nrmn0klu4st0qdg4w0wcktnsu5lwfneqlgw5w9",
    },
};

// Asset lists
pub const SHUTTLE_PAIRS: &str = "https://assets.terra.money/cw20/pairs.json";
pub const TERRA_WHITELIST: &str = "https://assets.terra.money/cw20/tokens.json";
pub const ETH_WHITELIST: &str = "https://assets.terra.money/shuttle/eth.json";
pub const BSC_WHITELIST: &str = "https://assets.terra.money/shuttle/bsc.json";
pub const HMY_WHITELIST: &str = "https://assets.terra.money/shuttle/hmy.json";

// Wallet install pages
pub const TERRA_EXTENSION: &str = "https://terra.money/extension";
pub const BSC_EXTENSION: &str = "https://chrome.google.com/webstore/detail/binance-chain-wallet/fhbohimaelbohpjbbldcngcnapndodjp";
pub const CHROME: &str = "https://google.com/chrome";

// Storage keys
pub const LAST_FROM_BLOCKCHAIN_KEY: &str = "lastFromBlockChain";
pub const LAST_TO_BLOCKCHAIN_KEY: &str = "lastToBlockChain";
pub const LAST_WALLET_TYPE_KEY: &str = "lastWalletType";
pub const BRIDGE_USED_KEY: &str = "bridgeUsed";
pub const STORAGE_FILE_NAME: &str = "session.json";
pub const STORAGE_DIR_NAME: &str = "bridge-session";

// Session defaults
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
pub const CONFIG_ENV_PREFIX: &str = "BRIDGE_SESSION";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
