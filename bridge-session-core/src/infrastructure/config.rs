//! Session core configuration
//!
//! Defaults, overridden by `BRIDGE_SESSION_*` environment variables (a
//! `.env` file is loaded first when present).

use std::path::PathBuf;

use config::{Config, Environment, Source};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::infrastructure::platform::FileStore;
use crate::shared::constants::CONFIG_ENV_PREFIX;
use crate::shared::error::SessionError;
use crate::shared::types::{BlockChain, NetworkEnvironment};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Terra environment preselected before any wallet reports one
    pub environment: NetworkEnvironment,
    pub storage_dir: Option<PathBuf>,
    pub log_level: String,
    pub default_from_chain: BlockChain,
    pub default_to_chain: BlockChain,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            environment: NetworkEnvironment::Mainnet,
            storage_dir: None,
            log_level: "info".to_string(),
            default_from_chain: BlockChain::Ethereum,
            default_to_chain: BlockChain::Terra,
        }
    }
}

impl SessionConfig {
    pub fn load() -> Result<Self, SessionError> {
        dotenv().ok();
        Self::from_source(Environment::with_prefix(CONFIG_ENV_PREFIX))
    }

    /// Build from defaults plus a single override source
    pub fn from_source<S>(source: S) -> Result<Self, SessionError>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let settings = Config::builder()
            .set_default("environment", defaults.environment.as_str())?
            .set_default("log_level", defaults.log_level)?
            .set_default("default_from_chain", defaults.default_from_chain.as_str())?
            .set_default("default_to_chain", defaults.default_to_chain.as_str())?
            .add_source(source)
            .build()?;

        let config: SessionConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.default_from_chain == self.default_to_chain {
            return Err(SessionError::config(format!(
                "default_from_chain and default_to_chain are both {}",
                self.default_from_chain
            )));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(SessionError::config(format!("Invalid log level: {}", self.log_level)));
        }
        Ok(())
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(FileStore::default_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_source(File::from_str("", FileFormat::Toml)).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert!(config.storage_dir().ends_with("bridge-session"));
    }

    #[test]
    fn test_environment_overrides() {
        let vars = HashMap::from([
            ("BRIDGE_SESSION_ENVIRONMENT".to_string(), "testnet".to_string()),
            ("BRIDGE_SESSION_STORAGE_DIR".to_string(), "/tmp/bridge".to_string()),
            ("BRIDGE_SESSION_DEFAULT_FROM_CHAIN".to_string(), "terra".to_string()),
            ("BRIDGE_SESSION_DEFAULT_TO_CHAIN".to_string(), "osmo".to_string()),
        ]);
        let source = Environment::with_prefix(CONFIG_ENV_PREFIX).source(Some(vars));
        let config = SessionConfig::from_source(source).unwrap();

        assert_eq!(config.environment, NetworkEnvironment::Testnet);
        assert_eq!(config.storage_dir(), PathBuf::from("/tmp/bridge"));
        assert_eq!(config.default_from_chain, BlockChain::Terra);
        assert_eq!(config.default_to_chain, BlockChain::Osmo);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let same_pair = File::from_str(
            "default_from_chain = \"bsc\"\ndefault_to_chain = \"bsc\"",
            FileFormat::Toml,
        );
        assert!(matches!(SessionConfig::from_source(same_pair), Err(SessionError::Config(_))));

        let bad_env = File::from_str("environment = \"devnet\"", FileFormat::Toml);
        assert!(matches!(SessionConfig::from_source(bad_env), Err(SessionError::Config(_))));

        let bad_level = File::from_str("log_level = \"loud\"", FileFormat::Toml);
        assert!(matches!(SessionConfig::from_source(bad_level), Err(SessionError::Config(_))));
    }
}
