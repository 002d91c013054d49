use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_EDGE_COLOR;
use crate::constants::FALLBACK_NATIVE_SYMBOL;

/// One supported chain: explorer API endpoint, web UI base for deep links,
/// and presentation attributes for the graph.
///
/// Credentials are never written into this struct by hand; `api_key_env`
/// names the environment variable that carries the key, and the in-file
/// `api_key` only exists as a fallback for local setups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Lower-case registry id, e.g. "ethereum"
    pub id: String,
    /// Display name, e.g. "Ethereum"
    pub name: String,
    /// Etherscan-style API base, e.g. "https://api.etherscan.io/api"
    pub api_url: String,
    /// Explorer web UI base, e.g. "https://etherscan.io"
    pub explorer_url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_native_symbol")]
    pub native_symbol: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
}

fn default_color() -> String {
    DEFAULT_EDGE_COLOR.to_string()
}

fn default_native_symbol() -> String {
    FALLBACK_NATIVE_SYMBOL.to_string()
}

impl NetworkConfig {
    /// Resolve the API credential, environment first.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(var) = &self.api_key_env {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    return Some(value);
                }
            }
        }
        self.api_key.clone()
    }

    pub fn address_url(
        &self,
        address: &str,
    ) -> String {
        format!("{}/address/{}", self.explorer_url.trim_end_matches('/'), address)
    }

    pub fn tx_url(
        &self,
        hash: &str,
    ) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}

/// The configured set of supported networks, in config order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkRegistry {
    pub networks: Vec<NetworkConfig>,
}

impl NetworkRegistry {
    pub fn get(
        &self,
        id: &str,
    ) -> Option<&NetworkConfig> {
        self.networks.iter().find(|n| n.id.eq_ignore_ascii_case(id.trim()))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.networks.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn display_name<'a>(
        &'a self,
        id: &'a str,
    ) -> &'a str {
        self.get(id).map(|n| n.name.as_str()).unwrap_or(id)
    }

    pub fn native_symbol(
        &self,
        id: &str,
    ) -> &str {
        self.get(id).map(|n| n.native_symbol.as_str()).unwrap_or(FALLBACK_NATIVE_SYMBOL)
    }

    pub fn color(
        &self,
        id: &str,
    ) -> &str {
        self.get(id).map(|n| n.color.as_str()).unwrap_or(DEFAULT_EDGE_COLOR)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
