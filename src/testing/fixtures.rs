use serde_json::json;
use serde_json::Value;

use crate::config::AnalyzerConfig;
use crate::config::Config;
use crate::config::LoggingConfig;
use crate::config::NetworkConfig;
use crate::config::NetworkRegistry;
use crate::config::SourceMode;
use crate::model::Interaction;
use crate::model::WalletSet;
use crate::pipeline::source::RawTransaction;

/// Well-known exchange cold wallets, handy as syntactically valid inputs
pub const WALLET_ONE: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
pub const WALLET_TWO: &str = "0x53d284357ec70cE289D6D64134DfAc8E511c8a3D";
pub const WALLET_THREE: &str = "0xDC76CD25977E0a5Ae17155770273aD58648900D3";

pub fn tracked_wallets() -> Vec<String> {
    vec![WALLET_ONE.to_string(), WALLET_TWO.to_string()]
}

pub fn wallet_set() -> WalletSet {
    WalletSet::from_raw(&tracked_wallets())
}

/// A registry entry pointing at a local mock server
pub fn test_network(
    id: &str,
    api_url: &str,
) -> NetworkConfig {
    NetworkConfig {
        id: id.to_string(),
        name: format!("{} Testnet", id),
        api_url: api_url.to_string(),
        explorer_url: format!("https://{}.example.io", id),
        icon: String::new(),
        color: "#646cff".to_string(),
        native_symbol: "ETH".to_string(),
        api_key: None,
        api_key_env: None,
    }
}

/// Full config with fast timeouts, no retries and a fixed seed so tests
/// stay deterministic
pub fn test_config(
    api_url: &str,
    network_ids: &[&str],
) -> Config {
    let networks = network_ids
        .iter()
        .map(|id| test_network(id, api_url))
        .collect();

    Config {
        networks: NetworkRegistry { networks },
        analyzer: AnalyzerConfig {
            mode: SourceMode::Live,
            real_fetch_cap: 3,
            request_timeout_ms: 2_000,
            max_retries: 0,
            base_retry_delay_ms: 1,
            max_retry_delay_ms: 5,
            node_spacing: 250.0,
            synthetic_rounds: 1,
            seed: Some(42),
        },
        logging: LoggingConfig {
            directory: None,
            ..LoggingConfig::default()
        },
    }
}

pub fn interaction(
    hash: &str,
    from: &str,
    to: &str,
    value: &str,
    timestamp: i64,
) -> Interaction {
    Interaction {
        hash: hash.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        value: value.to_string(),
        timestamp,
        block_number: 1,
        network: "ethereum".to_string(),
        network_name: "Ethereum".to_string(),
        token_symbol: None,
        token_name: None,
        token_decimals: None,
        is_token_transfer: false,
    }
}

pub fn raw_tx(
    hash: &str,
    from: &str,
    to: &str,
    value: &str,
    timestamp: i64,
) -> RawTransaction {
    RawTransaction {
        hash: hash.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        value: value.to_string(),
        time_stamp: timestamp.to_string(),
        block_number: "18500000".to_string(),
        token_symbol: None,
        token_name: None,
        token_decimal: None,
    }
}

/// Response body in the shape the explorer APIs return on success
pub fn txlist_body(transactions: &[RawTransaction]) -> Value {
    json!({
        "status": "1",
        "message": "OK",
        "result": transactions,
    })
}

/// Response body for an account with no history; status 0 is not an error
pub fn empty_body() -> Value {
    json!({
        "status": "0",
        "message": "No transactions found",
        "result": [],
    })
}
