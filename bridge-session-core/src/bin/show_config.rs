use anyhow::Context;
use bridge_session_core::core::registry;
use bridge_session_core::{BlockChain, NetworkEnvironment, SessionConfig, NAME, VERSION};

fn main() -> anyhow::Result<()> {
    let config = SessionConfig::load().context("failed to load session configuration")?;
    bridge_session_core::init(&config);

    println!("{} {} configuration:\n", NAME, VERSION);
    println!("  Terra environment: {}", config.environment);
    println!("  Default route: {} -> {}", config.default_from_chain, config.default_to_chain);
    println!("  Storage directory: {}", config.storage_dir().display());
    println!("  Log level: {}", config.log_level);

    println!("\nSupported EVM chain ids:");
    for chain_id in registry::supported_evm_chain_ids() {
        if let Some((chain, environment)) = registry::evm_chain_by_id(chain_id) {
            println!("  {:>12}  {} ({})", chain_id, registry::display_name(chain), environment);
        }
    }

    println!("\nTerra networks:");
    for environment in [NetworkEnvironment::Mainnet, NetworkEnvironment::Testnet] {
        let local = registry::terra_network(environment);
        println!("  {} [{}]", local.name, local.chain_id);
        println!("    lcd: {}", local.lcd);
        println!("    fcd: {}", local.fcd);
        println!("    mantle: {}", local.mantle);
        for chain in BlockChain::ALL.iter().copied().filter(|c| registry::is_evm_chain(*c)) {
            if let Some(address) = registry::shuttle_address(environment, chain) {
                println!("    shuttle ({}): {}", registry::display_name(chain), address);
            }
        }
    }

    println!("\nAsset whitelists:");
    for chain in BlockChain::ALL {
        if let Some(url) = registry::whitelist_url(chain) {
            println!("  {:<10} {}", registry::display_name(chain), url);
        }
    }

    println!("\nIBC chains:");
    for chain in BlockChain::ALL.iter().copied().filter(|c| registry::is_ibc_chain(*c)) {
        let chain_id = registry::ibc_chain_id(chain).unwrap_or("(not set)");
        println!("  {:<10} {}", registry::display_name(chain), chain_id);
    }

    Ok(())
}
