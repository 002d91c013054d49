use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::Config;
use crate::config::NetworkConfig;
use crate::config::SourceMode;
use crate::constants::MIN_TRACKED_WALLETS;
use crate::err_with_loc;
use crate::error::Result;
use crate::error::ValidationError;
use crate::model::InteractionGraph;
use crate::model::WalletAddress;
use crate::model::WalletSet;
use crate::pipeline::filter_and_sort;
use crate::pipeline::source::ExplorerClient;
use crate::pipeline::source::SyntheticSource;
use crate::pipeline::AnalysisReport;
use crate::pipeline::InteractionFilter;
use crate::pipeline::NetworkScan;
use crate::pipeline::ScanOutcome;
use crate::pipeline::SortSpec;
use crate::pipeline::TransactionSource;

/// One analysis invocation: the raw wallet input, the networks to scan,
/// and how to shape the result.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Raw wallet strings in input order; validation happens inside
    pub wallets: Vec<String>,
    /// Registry ids of the networks to scan
    pub networks: Vec<String>,
    /// Also pull the token-transfer feed on live scans
    pub include_tokens: bool,
    pub filter: InteractionFilter,
    pub sort: SortSpec,
    /// Overrides the configured source mode when set
    pub mode: Option<SourceMode>,
}

/// The analysis engine. Owns the data sources and drives one scan per
/// selected network, sequentially, then shapes the pooled interactions
/// into the report.
pub struct Analyzer {
    pub config: Config,
    live: ExplorerClient,
    synthetic: SyntheticSource,
}

impl Analyzer {
    pub fn new(config: Config) -> Result<Self> {
        let live = ExplorerClient::new(&config.analyzer)?;
        let synthetic = SyntheticSource::new(&config.analyzer);
        Ok(Self { config, live, synthetic })
    }

    /// Validates the request, scans the selected networks under the
    /// source mode, and assembles the report. Validation failures happen
    /// before any fetch; scan failures degrade per network instead of
    /// aborting the run.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport> {
        let wallets = self.validate_wallets(&request.wallets)?;
        let networks = self.resolve_networks(&request.networks)?;
        let mode = request.mode.unwrap_or(self.config.analyzer.mode);

        info!(
            "analysis_started::wallets::{}::networks::{}::mode::{:?}",
            wallets.len(),
            networks.len(),
            mode
        );

        let mut scans = Vec::with_capacity(networks.len());
        let mut pooled = Vec::new();

        for (index, network) in networks.iter().enumerate() {
            let outcome = self
                .scan_network(&wallets, network, index, mode, request.include_tokens, &mut pooled)
                .await;
            info!("network_scan::{}::{}", network.id, outcome);
            scans.push(NetworkScan {
                network: network.id.clone(),
                network_name: network.name.clone(),
                outcome,
            });
        }

        let interactions = filter_and_sort(&pooled, &request.filter, request.sort);
        let graph = InteractionGraph::build(&wallets, &interactions, self.config.analyzer.node_spacing);

        info!(
            "analysis_completed::interactions::{}::nodes::{}::edges::{}",
            interactions.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Ok(AnalysisReport {
            wallets: wallets.iter().map(WalletAddress::to_string).collect(),
            scans,
            interactions,
            graph: graph.export(&self.config.networks),
        })
    }

    /// One network scan. Which source runs is decided here and recorded
    /// in the outcome; live and synthetic data never mix silently.
    async fn scan_network(
        &self,
        wallets: &WalletSet,
        network: &NetworkConfig,
        index: usize,
        mode: SourceMode,
        include_tokens: bool,
        pooled: &mut Vec<crate::model::Interaction>,
    ) -> ScanOutcome {
        let cap = self.config.analyzer.real_fetch_cap;
        let use_live = match mode {
            SourceMode::Live | SourceMode::Demo => index < cap,
            SourceMode::Synthetic => false,
        };

        if use_live {
            match self.live.scan(wallets, network, include_tokens).await {
                Ok(batch) => {
                    let interactions = batch.interactions.len();
                    pooled.extend(batch.interactions);
                    return ScanOutcome::Live {
                        transactions: batch.transactions,
                        interactions,
                    };
                },
                Err(e) => {
                    warn!("live_scan_failed::{}::error::{}", network.id, e);
                    if mode == SourceMode::Live {
                        return ScanOutcome::Skipped {
                            reason: format!("live scan failed: {e}"),
                        };
                    }
                    // demo mode falls back to the synthetic source below
                },
            }
        } else if mode == SourceMode::Live {
            debug!("scan_skipped::{}::fetch_cap::{}", network.id, cap);
            return ScanOutcome::Skipped {
                reason: format!("fetch cap of {cap} reached"),
            };
        }

        match self.synthetic.scan(wallets, network, include_tokens).await {
            Ok(batch) => {
                let interactions = batch.interactions.len();
                pooled.extend(batch.interactions);
                ScanOutcome::Synthetic { interactions }
            },
            Err(e) => {
                warn!("synthetic_scan_failed::{}::error::{}", network.id, e);
                ScanOutcome::Skipped {
                    reason: format!("synthetic scan failed: {e}"),
                }
            },
        }
    }

    /// At least two distinct valid wallets are required before anything
    /// is fetched. Invalid and duplicate entries are dropped with a log
    /// line, matching the fail-soft posture of the scans themselves.
    fn validate_wallets(
        &self,
        raw: &[String],
    ) -> Result<WalletSet> {
        let mut wallets = WalletSet::new();
        for entry in raw {
            match WalletAddress::parse(entry) {
                Ok(address) => {
                    if !wallets.insert(address) {
                        debug!("wallet_duplicate_ignored::{}", entry);
                    }
                },
                Err(e) => {
                    debug!("wallet_rejected::{}::error::{}", entry, e);
                },
            }
        }

        if wallets.len() < MIN_TRACKED_WALLETS {
            return Err(err_with_loc!(ValidationError::TooFewValidAddresses {
                required: MIN_TRACKED_WALLETS,
                got: wallets.len(),
            }));
        }

        Ok(wallets)
    }

    /// Every selected id must resolve in the registry; duplicates are
    /// collapsed so a network is never scanned twice in one run.
    fn resolve_networks(
        &self,
        ids: &[String],
    ) -> Result<Vec<NetworkConfig>> {
        if ids.is_empty() {
            return Err(err_with_loc!(ValidationError::NoNetworksSelected));
        }

        let mut selected: Vec<NetworkConfig> = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(network) = self.config.networks.get(id) else {
                return Err(err_with_loc!(ValidationError::UnknownNetwork(id.clone())));
            };
            if selected.iter().any(|n| n.id == network.id) {
                debug!("network_duplicate_ignored::{}", id);
                continue;
            }
            selected.push(network.clone());
        }

        Ok(selected)
    }
}
