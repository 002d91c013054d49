use crate::config::NetworkConfig;
use crate::model::Interaction;
use crate::model::WalletSet;
use crate::pipeline::source::RawTransaction;

/// Keep the transactions whose sender AND receiver are both tracked
/// wallets, tagging each survivor with its network.
///
/// The receiver must be present: contract creations have an empty `to`
/// and are never interactions between wallets. Unparseable numeric
/// strings degrade to 0 instead of dropping the record.
pub fn extract_interactions(
    transactions: &[RawTransaction],
    wallets: &WalletSet,
    network: &NetworkConfig,
    token_feed: bool,
) -> Vec<Interaction> {
    transactions
        .iter()
        .filter(|tx| !tx.to.is_empty() && wallets.contains(&tx.from) && wallets.contains(&tx.to))
        .map(|tx| Interaction {
            hash: tx.hash.clone(),
            from: tx.from.clone(),
            to: tx.to.clone(),
            value: tx.value.clone(),
            timestamp: tx.time_stamp.parse().unwrap_or(0),
            block_number: tx.block_number.parse().unwrap_or(0),
            network: network.id.clone(),
            network_name: network.name.clone(),
            token_symbol: if token_feed { tx.token_symbol.clone() } else { None },
            token_name: if token_feed { tx.token_name.clone() } else { None },
            token_decimals: if token_feed {
                tx.token_decimal.as_deref().and_then(|d| d.parse().ok())
            } else {
                None
            },
            is_token_transfer: token_feed,
        })
        .collect()
}
