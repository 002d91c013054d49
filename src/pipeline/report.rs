use std::fmt;

use serde::Serialize;

use crate::model::GraphExport;
use crate::model::Interaction;

/// Everything one analysis produced. Reports are request-scoped: the
/// caller owns the result and nothing is retained between runs.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Validated wallets in input order, normalized
    pub wallets: Vec<String>,
    /// Per-network provenance, in scan order
    pub scans: Vec<NetworkScan>,
    /// Filtered and sorted interaction list
    pub interactions: Vec<Interaction>,
    pub graph: GraphExport,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkScan {
    pub network: String,
    pub network_name: String,
    pub outcome: ScanOutcome,
}

/// How a network's data was obtained. Networks beyond the live fetch cap
/// are labelled skipped (or synthetic in demo mode), never silently
/// backfilled.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScanOutcome {
    Live { transactions: usize, interactions: usize },
    Synthetic { interactions: usize },
    Skipped { reason: String },
}

impl ScanOutcome {
    pub fn interaction_count(&self) -> usize {
        match self {
            ScanOutcome::Live { interactions, .. } => *interactions,
            ScanOutcome::Synthetic { interactions } => *interactions,
            ScanOutcome::Skipped { .. } => 0,
        }
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ScanOutcome::Live { transactions, interactions } => {
                write!(f, "live: {transactions} transactions, {interactions} interactions")
            },
            ScanOutcome::Synthetic { interactions } => write!(f, "synthetic: {interactions} interactions"),
            ScanOutcome::Skipped { reason } => write!(f, "skipped ({reason})"),
        }
    }
}
