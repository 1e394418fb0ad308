//! Static registry of the test networks the dapp can talk to.
//!
//! The table is built at compile time and never changes. Entries are kept in
//! definition order, which is also the order a network picker renders them.

use dp_api_types::{BlockExplorer, ChainDefinition, NativeCurrency, NetworkSummary};
use serde::Serialize;

pub const SEPOLIA: &str = "sepolia";
pub const BASE_SEPOLIA: &str = "baseSepolia";
pub const ARBITRUM_SEPOLIA: &str = "arbitrumSepolia";

/// Selected when the application starts.
pub const DEFAULT_NETWORK_KEY: &str = BASE_SEPOLIA;

const SEPOLIA_ETHER: NativeCurrency = NativeCurrency {
    name: "Sepolia Ether",
    symbol: "ETH",
    decimals: 18,
};

pub const SEPOLIA_CHAIN: ChainDefinition = ChainDefinition {
    id: 11_155_111,
    name: "Sepolia",
    native_currency: SEPOLIA_ETHER,
    rpc_urls: &["https://sepolia.drpc.org"],
    block_explorer: Some(BlockExplorer {
        name: "Etherscan",
        url: "https://sepolia.etherscan.io",
    }),
    testnet: true,
};

pub const BASE_SEPOLIA_CHAIN: ChainDefinition = ChainDefinition {
    id: 84_532,
    name: "Base Sepolia",
    native_currency: SEPOLIA_ETHER,
    rpc_urls: &["https://sepolia.base.org"],
    block_explorer: Some(BlockExplorer {
        name: "Basescan",
        url: "https://sepolia.basescan.org",
    }),
    testnet: true,
};

pub const ARBITRUM_SEPOLIA_CHAIN: ChainDefinition = ChainDefinition {
    id: 421_614,
    name: "Arbitrum Sepolia",
    native_currency: SEPOLIA_ETHER,
    rpc_urls: &["https://sepolia-rollup.arbitrum.io/rpc"],
    block_explorer: Some(BlockExplorer {
        name: "Arbiscan",
        url: "https://sepolia.arbiscan.io",
    }),
    testnet: true,
};

/// One network as the rest of the application sees it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub id: u64,
    /// Registry key.
    pub key: &'static str,
    /// Machine name exposed to consumers (kebab-case).
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(skip)]
    pub chain: &'static ChainDefinition,
    pub rpc_url: &'static str,
    /// Empty when the chain has no known explorer.
    pub block_explorer: &'static str,
    pub color: &'static str,
}

impl NetworkDescriptor {
    const fn from_chain(
        key: &'static str,
        name: &'static str,
        display_name: &'static str,
        chain: &'static ChainDefinition,
        color: &'static str,
    ) -> Self {
        let rpc_url = match chain.rpc_urls.first() {
            Some(url) => *url,
            None => "",
        };
        let block_explorer = match chain.block_explorer {
            Some(explorer) => explorer.url,
            None => "",
        };
        Self {
            id: chain.id,
            key,
            name,
            display_name,
            chain,
            rpc_url,
            block_explorer,
            color,
        }
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            id: self.id,
            key: self.key.to_owned(),
            name: self.name.to_owned(),
            display_name: self.display_name.to_owned(),
            rpc_url: self.rpc_url.to_owned(),
            block_explorer: self.block_explorer.to_owned(),
            color: self.color.to_owned(),
        }
    }

    pub fn tx_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer_link("tx", tx_hash)
    }

    pub fn address_url(&self, address: &str) -> Option<String> {
        self.explorer_link("address", address)
    }

    fn explorer_link(&self, kind: &str, value: &str) -> Option<String> {
        if self.block_explorer.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}/{}",
            self.block_explorer.trim_end_matches('/'),
            kind,
            value
        ))
    }
}

static NETWORKS: [NetworkDescriptor; 3] = [
    NetworkDescriptor::from_chain(SEPOLIA, "sepolia", "Sepolia", &SEPOLIA_CHAIN, "#627EEA"),
    NetworkDescriptor::from_chain(
        BASE_SEPOLIA,
        "base-sepolia",
        "Base Sepolia",
        &BASE_SEPOLIA_CHAIN,
        "#0052FF",
    ),
    NetworkDescriptor::from_chain(
        ARBITRUM_SEPOLIA,
        "arbitrum-sepolia",
        "Arbitrum Sepolia",
        &ARBITRUM_SEPOLIA_CHAIN,
        "#28A0F0",
    ),
];

/// Every known network, in definition order.
pub fn all() -> &'static [NetworkDescriptor] {
    &NETWORKS
}

pub fn get(key: &str) -> Option<&'static NetworkDescriptor> {
    NETWORKS.iter().find(|network| network.key == key)
}

pub fn by_chain_id(chain_id: u64) -> Option<&'static NetworkDescriptor> {
    NETWORKS.iter().find(|network| network.id == chain_id)
}

pub fn default_network() -> &'static NetworkDescriptor {
    // DEFAULT_NETWORK_KEY is one of the entries above
    &NETWORKS[1]
}
