pub mod explorer;
pub mod synthetic;

use async_trait::async_trait;

pub use explorer::ExplorerClient;
pub use explorer::RawTransaction;
pub use explorer::TxFeed;
pub use synthetic::SyntheticSource;

use crate::config::NetworkConfig;
use crate::error::Result;
use crate::model::Interaction;
use crate::model::WalletSet;

/// What one network scan produced.
#[derive(Debug, Clone, Default)]
pub struct SourceBatch {
    /// Raw transactions seen before extraction (after per-feed dedup)
    pub transactions: usize,
    pub interactions: Vec<Interaction>,
}

/// A provider of wallet interactions for a single network scan.
///
/// Implementations are either live (explorer HTTP APIs) or synthetic
/// (generated fixtures); the engine selects one per network and records
/// its provenance in the scan outcome.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn scan(
        &self,
        wallets: &WalletSet,
        network: &NetworkConfig,
        include_tokens: bool,
    ) -> Result<SourceBatch>;
}
