use alloy_primitives::U256;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::utils::parse_wei;

/// A transaction whose sender and receiver are both tracked wallets.
///
/// Addresses and the value keep the exact casing and digits the explorer
/// returned; normalization happens at comparison boundaries instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    /// Raw base-10 wei amount as returned by the explorer
    pub value: String,
    /// Unix seconds, 0 when the explorer value did not parse
    pub timestamp: i64,
    pub block_number: u64,
    /// Registry id of the originating network
    pub network: String,
    pub network_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_decimals: Option<u8>,
    pub is_token_transfer: bool,
}

impl Interaction {
    pub fn value_wei(&self) -> Option<U256> {
        parse_wei(&self.value)
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Decimals used when rendering this interaction's value.
    pub fn display_decimals(&self) -> u8 {
        if self.is_token_transfer {
            self.token_decimals.unwrap_or(crate::constants::NATIVE_DECIMALS)
        } else {
            crate::constants::NATIVE_DECIMALS
        }
    }
}
