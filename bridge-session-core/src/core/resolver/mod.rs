//! Network resolution
//!
//! Turns the raw network a wallet reports into a supported chain, or an
//! [`UnsupportedNetwork`] describing what was rejected. One resolver per
//! chain family sits behind the [`NetworkResolver`] trait; the caller picks
//! the resolver from the family of the chain the user selected.
//!
//! Resolvers are pure: they read the static registry and nothing else.
//! Recording the outcome in session state is the controller's job.

use crate::core::registry;
use crate::domain::entities::attempt::UnsupportedNetwork;
use crate::domain::entities::network::{
    EvmNetwork, ExtensionNetwork, IbcNetwork, LocalNetworkConfig, NativeDescriptor, NetworkDescriptor,
};
use crate::shared::types::{BlockChain, ChainFamily, NetworkEnvironment, RawChainId};

/// A wallet network the registry accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedNetwork {
    Evm {
        chain: BlockChain,
        environment: NetworkEnvironment,
        network: EvmNetwork,
    },
    Native {
        local: &'static LocalNetworkConfig,
        extension: ExtensionNetwork,
    },
    Ibc {
        chain: BlockChain,
        network: IbcNetwork,
    },
}

impl ResolvedNetwork {
    pub fn chain(&self) -> BlockChain {
        match self {
            ResolvedNetwork::Evm { chain, .. } => *chain,
            ResolvedNetwork::Native { .. } => BlockChain::Terra,
            ResolvedNetwork::Ibc { chain, .. } => *chain,
        }
    }

    pub fn family(&self) -> ChainFamily {
        self.chain().family()
    }
}

pub type Resolution = Result<ResolvedNetwork, UnsupportedNetwork>;

pub trait NetworkResolver: Send + Sync {
    fn family(&self) -> ChainFamily;

    /// Descriptors of another family resolve as missing network info.
    fn resolve(&self, descriptor: &NetworkDescriptor) -> Resolution;
}

/// Ethereum, BSC and Harmony: numeric chain id against the allow-list.
///
/// The resolved chain follows the wallet, so a wallet already on BSC
/// resolves to BSC even if Ethereum was selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvmResolver;

impl NetworkResolver for EvmResolver {
    fn family(&self) -> ChainFamily {
        ChainFamily::Evm
    }

    fn resolve(&self, descriptor: &NetworkDescriptor) -> Resolution {
        let network = match descriptor {
            NetworkDescriptor::Evm(Some(network)) => network,
            _ => return Err(UnsupportedNetwork::missing_info(ChainFamily::Evm, BlockChain::Ethereum)),
        };

        match registry::evm_chain_by_id(network.chain_id) {
            Some((chain, environment)) => {
                log::debug!("EVM chain id {} resolved to {} {}", network.chain_id, chain, environment);
                Ok(ResolvedNetwork::Evm {
                    chain,
                    environment,
                    network: network.clone(),
                })
            }
            None => Err(UnsupportedNetwork::unknown(
                ChainFamily::Evm,
                BlockChain::Ethereum,
                Some(network.name.clone()),
                Some(RawChainId::Numeric(network.chain_id)),
            )),
        }
    }
}

/// Terra, by extension network name or wallet-connect chain id.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeResolver;

impl NetworkResolver for NativeResolver {
    fn family(&self) -> ChainFamily {
        ChainFamily::Native
    }

    fn resolve(&self, descriptor: &NetworkDescriptor) -> Resolution {
        let missing = || UnsupportedNetwork::missing_info(ChainFamily::Native, BlockChain::Terra);

        match descriptor {
            NetworkDescriptor::Native(NativeDescriptor::Extension { name, chain_id }) => {
                match registry::terra_network_by_name(name) {
                    Some(local) => {
                        log::debug!("Terra extension network {} resolved to {}", name, local.chain_id);
                        Ok(ResolvedNetwork::Native {
                            local,
                            extension: ExtensionNetwork::new(name.clone(), chain_id.clone()),
                        })
                    }
                    None => Err(UnsupportedNetwork::unknown(
                        ChainFamily::Native,
                        BlockChain::Terra,
                        Some(name.clone()),
                        Some(chain_id.clone())
                            .filter(|id| !id.is_empty())
                            .map(RawChainId::Text),
                    )),
                }
            }
            NetworkDescriptor::Native(NativeDescriptor::WalletConnect { chain_id: Some(id) }) => {
                match registry::terra_network_by_walletconnect_id(*id) {
                    Some(local) => {
                        log::debug!("Terra wallet-connect id {} resolved to {}", id, local.chain_id);
                        Ok(ResolvedNetwork::Native {
                            local,
                            extension: local.to_extension_network(),
                        })
                    }
                    None => Err(UnsupportedNetwork::unknown(
                        ChainFamily::Native,
                        BlockChain::Terra,
                        None,
                        Some(RawChainId::Numeric(*id)),
                    )),
                }
            }
            _ => Err(missing()),
        }
    }
}

/// IBC chains: any non-empty chain id from the signer is accepted.
///
/// Unlike the other families there is no allow-list check. An id that does
/// not match the registry's id for the selected chain is logged and still
/// accepted, pending a product decision on arbitrary IBC chains.
#[derive(Debug, Default, Clone, Copy)]
pub struct IbcResolver;

impl NetworkResolver for IbcResolver {
    fn family(&self) -> ChainFamily {
        ChainFamily::Ibc
    }

    fn resolve(&self, descriptor: &NetworkDescriptor) -> Resolution {
        let (chain, chain_id) = match descriptor {
            NetworkDescriptor::Ibc { chain, chain_id } if registry::is_ibc_chain(*chain) => (*chain, chain_id),
            NetworkDescriptor::Ibc { chain, .. } => {
                return Err(UnsupportedNetwork::missing_info(ChainFamily::Ibc, *chain))
            }
            _ => return Err(UnsupportedNetwork::missing_info(ChainFamily::Ibc, BlockChain::Osmo)),
        };

        let chain_id = match chain_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(UnsupportedNetwork::missing_info(ChainFamily::Ibc, chain)),
        };

        if registry::ibc_chain_id(chain) != Some(chain_id) {
            log::warn!(
                "Accepting unrecognised chain id {} for {} (expected {:?})",
                chain_id,
                chain,
                registry::ibc_chain_id(chain)
            );
        }

        Ok(ResolvedNetwork::Ibc {
            chain,
            network: IbcNetwork {
                chain_id: chain_id.to_string(),
                name: registry::display_name(chain).to_string(),
            },
        })
    }
}

/// Resolver for a chain family
pub fn resolver_for(family: ChainFamily) -> &'static dyn NetworkResolver {
    match family {
        ChainFamily::Evm => &EvmResolver,
        ChainFamily::Native => &NativeResolver,
        ChainFamily::Ibc => &IbcResolver,
    }
}

/// Resolve with the resolver matching the descriptor's own family.
pub fn resolve(descriptor: &NetworkDescriptor) -> Resolution {
    resolver_for(descriptor.family()).resolve(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::attempt::UnsupportedReason;
    use proptest::prelude::*;

    fn evm(chain_id: u64) -> NetworkDescriptor {
        NetworkDescriptor::Evm(Some(EvmNetwork::new(chain_id, "unknown")))
    }

    fn extension(name: &str, chain_id: &str) -> NetworkDescriptor {
        NetworkDescriptor::Native(NativeDescriptor::Extension {
            name: name.to_string(),
            chain_id: chain_id.to_string(),
        })
    }

    fn wallet_connect(chain_id: Option<u64>) -> NetworkDescriptor {
        NetworkDescriptor::Native(NativeDescriptor::WalletConnect { chain_id })
    }

    fn ibc(chain: BlockChain, chain_id: Option<&str>) -> NetworkDescriptor {
        NetworkDescriptor::Ibc {
            chain,
            chain_id: chain_id.map(str::to_string),
        }
    }

    #[test]
    fn test_bsc_mainnet_resolves_to_bsc() {
        let resolved = EvmResolver.resolve(&evm(56)).unwrap();
        assert_eq!(resolved.chain(), BlockChain::Bsc);
        match resolved {
            ResolvedNetwork::Evm { environment, network, .. } => {
                assert_eq!(environment, NetworkEnvironment::Mainnet);
                assert_eq!(network.chain_id, 56);
            }
            other => panic!("unexpected resolution {:?}", other),
        }
    }

    #[test]
    fn test_unknown_evm_id_is_rejected_with_id() {
        let unsupported = EvmResolver.resolve(&evm(999999)).unwrap_err();
        assert_eq!(unsupported.family, ChainFamily::Evm);
        assert_eq!(unsupported.chain, BlockChain::Ethereum);
        assert_eq!(unsupported.chain_id, Some(RawChainId::Numeric(999999)));
        assert_eq!(unsupported.name.as_deref(), Some("unknown"));
        assert_eq!(unsupported.reason, UnsupportedReason::UnknownNetwork);
    }

    #[test]
    fn test_missing_evm_network() {
        let unsupported = EvmResolver.resolve(&NetworkDescriptor::Evm(None)).unwrap_err();
        assert_eq!(unsupported.reason, UnsupportedReason::MissingNetworkInfo);
        assert_eq!(unsupported.chain_id, None);
    }

    #[test]
    fn test_extension_names() {
        let resolved = NativeResolver.resolve(&extension("mainnet", "columbus-4")).unwrap();
        match resolved {
            ResolvedNetwork::Native { local, extension } => {
                assert_eq!(local.environment, NetworkEnvironment::Mainnet);
                assert_eq!(extension, ExtensionNetwork::new("mainnet", "columbus-4"));
            }
            other => panic!("unexpected resolution {:?}", other),
        }

        let resolved = NativeResolver.resolve(&extension("testnet", "tequila-0004")).unwrap();
        assert!(matches!(
            resolved,
            ResolvedNetwork::Native { local, .. } if local.environment == NetworkEnvironment::Testnet
        ));
    }

    #[test]
    fn test_unknown_extension_name_keeps_raw_values() {
        let unsupported = NativeResolver.resolve(&extension("localterra", "localterra")).unwrap_err();
        assert_eq!(unsupported.family, ChainFamily::Native);
        assert_eq!(unsupported.chain, BlockChain::Terra);
        assert_eq!(unsupported.name.as_deref(), Some("localterra"));
        assert_eq!(unsupported.chain_id, Some(RawChainId::Text("localterra".to_string())));
        assert_eq!(unsupported.reason, UnsupportedReason::UnknownNetwork);
    }

    #[test]
    fn test_wallet_connect_ids() {
        let resolved = NativeResolver.resolve(&wallet_connect(Some(1))).unwrap();
        match resolved {
            ResolvedNetwork::Native { local, extension } => {
                assert_eq!(local.chain_id, "columbus-4");
                assert_eq!(extension.chain_id, "columbus-4");
            }
            other => panic!("unexpected resolution {:?}", other),
        }

        let unsupported = NativeResolver.resolve(&wallet_connect(Some(7))).unwrap_err();
        assert_eq!(unsupported.chain_id, Some(RawChainId::Numeric(7)));
        assert_eq!(unsupported.reason, UnsupportedReason::UnknownNetwork);
    }

    #[test]
    fn test_wallet_connect_without_id_has_no_info() {
        let unsupported = NativeResolver.resolve(&wallet_connect(None)).unwrap_err();
        assert_eq!(unsupported.reason, UnsupportedReason::MissingNetworkInfo);
        assert_eq!(unsupported.name, None);
        assert_eq!(unsupported.chain_id, None);

        let unavailable = NetworkDescriptor::Native(NativeDescriptor::Unavailable);
        assert_eq!(
            NativeResolver.resolve(&unavailable).unwrap_err().reason,
            UnsupportedReason::MissingNetworkInfo
        );
    }

    #[test]
    fn test_ibc_accepts_unlisted_ids() {
        let resolved = IbcResolver.resolve(&ibc(BlockChain::Osmo, Some("osmo-test-5"))).unwrap();
        match resolved {
            ResolvedNetwork::Ibc { chain, network } => {
                assert_eq!(chain, BlockChain::Osmo);
                assert_eq!(network.chain_id, "osmo-test-5");
                assert_eq!(network.name, "Osmosis");
            }
            other => panic!("unexpected resolution {:?}", other),
        }
    }

    #[test]
    fn test_ibc_empty_or_missing_id_is_rejected() {
        for chain_id in [None, Some("")] {
            let unsupported = IbcResolver.resolve(&ibc(BlockChain::Scrt, chain_id)).unwrap_err();
            assert_eq!(unsupported.chain, BlockChain::Scrt);
            assert_eq!(unsupported.reason, UnsupportedReason::MissingNetworkInfo);
        }
    }

    #[test]
    fn test_wrong_family_descriptor_is_missing_info() {
        for family in [ChainFamily::Evm, ChainFamily::Native, ChainFamily::Ibc] {
            let resolver = resolver_for(family);
            assert_eq!(resolver.family(), family);
            let foreign = match family {
                ChainFamily::Evm => wallet_connect(Some(1)),
                ChainFamily::Native => evm(1),
                ChainFamily::Ibc => evm(56),
            };
            let unsupported = resolver.resolve(&foreign).unwrap_err();
            assert_eq!(unsupported.family, family);
            assert_eq!(unsupported.reason, UnsupportedReason::MissingNetworkInfo);
        }
    }

    #[test]
    fn test_resolve_dispatches_on_descriptor_family() {
        assert_eq!(resolve(&evm(1666700000)).unwrap().chain(), BlockChain::Harmony);
        assert_eq!(resolve(&wallet_connect(Some(0))).unwrap().chain(), BlockChain::Terra);
        assert_eq!(
            resolve(&ibc(BlockChain::Cosmos, Some("cosmoshub-4"))).unwrap().family(),
            ChainFamily::Ibc
        );
    }

    proptest! {
        #[test]
        fn prop_allowed_evm_ids_resolve(index in 0usize..6) {
            let chain_id = registry::supported_evm_chain_ids()[index];
            let resolved = EvmResolver.resolve(&evm(chain_id)).unwrap();
            let (expected, _) = registry::evm_chain_by_id(chain_id).unwrap();
            prop_assert_eq!(resolved.chain(), expected);
        }

        #[test]
        fn prop_other_evm_ids_are_rejected(chain_id in any::<u64>()) {
            prop_assume!(!registry::is_supported_evm_chain_id(chain_id));
            let unsupported = EvmResolver.resolve(&evm(chain_id)).unwrap_err();
            prop_assert_eq!(unsupported.chain_id, Some(RawChainId::Numeric(chain_id)));
        }

        #[test]
        fn prop_unknown_extension_names_are_rejected(name in "[a-z]{1,12}") {
            prop_assume!(name != "mainnet" && name != "testnet");
            let unsupported = NativeResolver.resolve(&extension(&name, "c-1")).unwrap_err();
            prop_assert_eq!(unsupported.name, Some(name));
        }

        #[test]
        fn prop_ibc_accepts_any_non_empty_id(chain_id in "[a-z0-9-]{1,24}") {
            let resolved = IbcResolver.resolve(&ibc(BlockChain::Inj, Some(&chain_id))).unwrap();
            match resolved {
                ResolvedNetwork::Ibc { network, .. } => prop_assert_eq!(network.chain_id, chain_id),
                other => prop_assert!(false, "unexpected resolution {:?}", other),
            }
        }
    }
}
