use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use alloy_primitives::U256;
use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use super::SourceBatch;
use super::TransactionSource;
use crate::config::AnalyzerConfig;
use crate::config::NetworkConfig;
use crate::constants::SECONDS_PER_DAY;
use crate::constants::SYNTHETIC_MAX_WEI;
use crate::constants::SYNTHETIC_MIN_WEI;
use crate::constants::SYNTHETIC_TOKENS;
use crate::error::Result;
use crate::model::Interaction;
use crate::model::WalletSet;

/// Fixture source: emits plausible interactions between the tracked
/// wallets without touching the network.
///
/// Every ordered pair of distinct wallets gets one native transfer per
/// round (plus one token transfer in token mode), with timestamps stepped
/// one day apart per emitted record, newest first.
pub struct SyntheticSource {
    seed: Option<u64>,
    rounds: usize,
}

impl SyntheticSource {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            seed: config.seed,
            rounds: config.synthetic_rounds.max(1),
        }
    }

    /// Seeded runs stay reproducible but still differ across networks.
    fn rng_for(
        &self,
        network: &NetworkConfig,
    ) -> StdRng {
        match self.seed {
            Some(seed) => {
                let mut hasher = DefaultHasher::new();
                network.id.hash(&mut hasher);
                StdRng::seed_from_u64(seed ^ hasher.finish())
            },
            None => StdRng::from_os_rng(),
        }
    }

    fn random_hash(rng: &mut StdRng) -> String {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes[..]);
        format!("0x{}", hex::encode(bytes))
    }

    fn native_amount(rng: &mut StdRng) -> String {
        rng.random_range(SYNTHETIC_MIN_WEI..=SYNTHETIC_MAX_WEI).to_string()
    }

    fn token_amount(
        rng: &mut StdRng,
        decimals: u8,
    ) -> String {
        let units = rng.random_range(1u64..=5_000);
        let scale = U256::from(10u64).checked_pow(U256::from(decimals)).unwrap_or(U256::from(1u64));
        U256::from(units).saturating_mul(scale).to_string()
    }
}

#[async_trait]
impl TransactionSource for SyntheticSource {
    async fn scan(
        &self,
        wallets: &WalletSet,
        network: &NetworkConfig,
        include_tokens: bool,
    ) -> Result<SourceBatch> {
        let mut rng = self.rng_for(network);
        let base = Utc::now().timestamp();
        let mut step = 0i64;
        let mut batch = SourceBatch::default();

        for _ in 0..self.rounds {
            for from in wallets.iter() {
                for to in wallets.iter() {
                    if from == to {
                        continue;
                    }

                    let timestamp = base - step * SECONDS_PER_DAY;
                    step += 1;
                    batch.interactions.push(Interaction {
                        hash: Self::random_hash(&mut rng),
                        from: from.as_str().to_string(),
                        to: to.as_str().to_string(),
                        value: Self::native_amount(&mut rng),
                        timestamp,
                        block_number: (timestamp.max(0) / 12) as u64,
                        network: network.id.clone(),
                        network_name: network.name.clone(),
                        token_symbol: None,
                        token_name: None,
                        token_decimals: None,
                        is_token_transfer: false,
                    });

                    if include_tokens {
                        let (symbol, name, decimals) =
                            SYNTHETIC_TOKENS[rng.random_range(0..SYNTHETIC_TOKENS.len())];
                        let timestamp = base - step * SECONDS_PER_DAY;
                        step += 1;
                        batch.interactions.push(Interaction {
                            hash: Self::random_hash(&mut rng),
                            from: from.as_str().to_string(),
                            to: to.as_str().to_string(),
                            value: Self::token_amount(&mut rng, decimals),
                            timestamp,
                            block_number: (timestamp.max(0) / 12) as u64,
                            network: network.id.clone(),
                            network_name: network.name.clone(),
                            token_symbol: Some(symbol.to_string()),
                            token_name: Some(name.to_string()),
                            token_decimals: Some(decimals),
                            is_token_transfer: true,
                        });
                    }
                }
            }
        }

        batch.transactions = batch.interactions.len();
        debug!("synthetic_generated::{}::interactions::{}", network.id, batch.transactions);

        Ok(batch)
    }
}
