use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

/// Upstream chain definition. Carried alongside a descriptor but never
/// interpreted by the selection store.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChainDefinition {
    pub id: u64,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: &'static [&'static str],
    pub block_explorer: Option<BlockExplorer>,
    pub testnet: bool,
}

impl ChainDefinition {
    pub fn default_rpc_url(&self) -> &'static str {
        self.rpc_urls.first().copied().unwrap_or_default()
    }

    pub fn default_explorer_url(&self) -> &'static str {
        self.block_explorer.map(|e| e.url).unwrap_or_default()
    }
}

/// Public shape of a network as seen by anything rendering a picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSummary {
    pub id: u64,
    pub key: String,
    pub name: String,
    pub display_name: String,
    pub rpc_url: String,
    pub block_explorer: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkListResponse {
    pub default: String,
    pub networks: Vec<NetworkSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_camel_case_field_names() {
        let summary = NetworkSummary {
            id: 84532,
            key: "baseSepolia".to_owned(),
            name: "base-sepolia".to_owned(),
            display_name: "Base Sepolia".to_owned(),
            rpc_url: "https://sepolia.base.org".to_owned(),
            block_explorer: String::new(),
            color: "#0052FF".to_owned(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["displayName"], "Base Sepolia");
        assert_eq!(json["rpcUrl"], "https://sepolia.base.org");
        assert_eq!(json["blockExplorer"], "");
    }

    #[test]
    fn missing_explorer_yields_empty_url() {
        let chain = ChainDefinition {
            id: 1,
            name: "Local",
            native_currency: NativeCurrency {
                name: "Ether",
                symbol: "ETH",
                decimals: 18,
            },
            rpc_urls: &[],
            block_explorer: None,
            testnet: true,
        };
        assert_eq!(chain.default_explorer_url(), "");
        assert_eq!(chain.default_rpc_url(), "");
    }
}
