use std::collections::HashMap;

use alloy_primitives::U256;
use petgraph::prelude::*;
use petgraph::Graph;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::NetworkRegistry;
use crate::constants::GRAPH_ROW_Y;
use crate::model::address::WalletAddress;
use crate::model::address::WalletSet;
use crate::model::interaction::Interaction;
use crate::utils::format_native_amount;
use crate::utils::parse_wei;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletNode {
    /// Normalized (lower-case) wallet address, the node key
    pub address: String,
    /// Display label, "Wallet N" in input order
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Aggregated flow for one ordered (sender, receiver) pair.
#[derive(Debug, Clone)]
struct EdgeWeight {
    hashes: Vec<String>,
    total: U256,
    /// Network of the first contributing interaction
    network: String,
    network_name: String,
}

/// One directed edge of the exported graph. A→B and B→A are distinct
/// edges; flows in opposite directions are never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEdge {
    pub from: String,
    pub to: String,
    /// Hashes of every contributing transaction, including those whose
    /// value did not parse into the total
    pub hashes: Vec<String>,
    /// Base-10 sum of the parseable contributing values, in wei
    pub total_wei: String,
    /// "1.5000 ETH" style label in the representative network's currency
    pub label: String,
    pub network: String,
    pub network_name: String,
    pub color: String,
    /// Explorer page of the first contributing transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_tx_url: Option<String>,
}

/// Interaction graph over the tracked wallets: one node per wallet, one
/// edge per ordered (sender, receiver) pair with aggregated values.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    graph: Graph<WalletNode, EdgeWeight>,
    node_indices: HashMap<String, NodeIndex>,
}

impl InteractionGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_indices: HashMap::new(),
        }
    }

    pub fn build(
        wallets: &WalletSet,
        interactions: &[Interaction],
        spacing: f64,
    ) -> Self {
        let mut graph = Self::new();
        let count = wallets.len();

        for (index, wallet) in wallets.iter().enumerate() {
            graph.add_wallet(wallet, index, count, spacing);
        }

        for interaction in interactions {
            graph.accumulate(interaction);
        }

        graph
    }

    /// Nodes sit on one row, centered around x = 0 in input order.
    fn add_wallet(
        &mut self,
        wallet: &WalletAddress,
        index: usize,
        count: usize,
        spacing: f64,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(wallet.as_str()) {
            return idx;
        }

        let node = WalletNode {
            address: wallet.as_str().to_string(),
            label: format!("Wallet {}", index + 1),
            x: spacing * (index as f64 - (count as f64 - 1.0) / 2.0),
            y: GRAPH_ROW_Y,
        };

        let idx = self.graph.add_node(node);
        self.node_indices.insert(wallet.as_str().to_string(), idx);

        idx
    }

    /// Fold one interaction into its ordered-pair edge. The hash is always
    /// recorded; a value that fails to parse is left out of the sum.
    fn accumulate(
        &mut self,
        interaction: &Interaction,
    ) {
        let from = interaction.from.to_lowercase();
        let to = interaction.to.to_lowercase();

        let (Some(&from_idx), Some(&to_idx)) = (self.node_indices.get(&from), self.node_indices.get(&to)) else {
            debug!("edge_endpoint_untracked::{}::{}", interaction.network, interaction.hash);
            return;
        };

        let edge_idx = match self.graph.find_edge(from_idx, to_idx) {
            Some(idx) => idx,
            None => self.graph.add_edge(
                from_idx,
                to_idx,
                EdgeWeight {
                    hashes: Vec::new(),
                    total: U256::ZERO,
                    network: interaction.network.clone(),
                    network_name: interaction.network_name.clone(),
                },
            ),
        };

        if let Some(weight) = self.graph.edge_weight_mut(edge_idx) {
            weight.hashes.push(interaction.hash.clone());
            match parse_wei(&interaction.value) {
                Some(value) => weight.total = weight.total.saturating_add(value),
                None => {
                    debug!("edge_value_unparseable::{}::{}", interaction.network, interaction.hash);
                },
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Flatten into the serializable form consumers render, resolving
    /// labels, colors and explorer links against the network registry.
    pub fn export(
        &self,
        networks: &NetworkRegistry,
    ) -> GraphExport {
        let nodes: Vec<WalletNode> = self.graph.node_weights().cloned().collect();

        let mut edges = Vec::with_capacity(self.graph.edge_count());
        for edge in self.graph.edge_references() {
            let weight = edge.weight();
            let explorer_tx_url = weight
                .hashes
                .first()
                .and_then(|hash| networks.get(&weight.network).map(|network| network.tx_url(hash)));

            edges.push(InteractionEdge {
                from: self.graph[edge.source()].address.clone(),
                to: self.graph[edge.target()].address.clone(),
                hashes: weight.hashes.clone(),
                total_wei: weight.total.to_string(),
                label: format_native_amount(weight.total, networks.native_symbol(&weight.network)),
                network: weight.network.clone(),
                network_name: weight.network_name.clone(),
                color: networks.color(&weight.network).to_string(),
                explorer_tx_url,
            });
        }

        GraphExport { nodes, edges }
    }
}

/// Serializable node/edge lists, the shape a dashboard renders directly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphExport {
    pub nodes: Vec<WalletNode>,
    pub edges: Vec<InteractionEdge>,
}

impl GraphExport {
    /// Graphviz rendition with per-network edge colors.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph wallet_interactions {\n");
        out.push_str("    rankdir = LR;\n");
        out.push_str("    node [shape = box, style = rounded];\n");

        for node in &self.nodes {
            out.push_str(&format!("    \"{}\" [label = \"{}\"];\n", node.address, node.label));
        }

        for edge in &self.edges {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\" [label = \"{}\", color = \"{}\"];\n",
                edge.from, edge.to, edge.label, edge.color
            ));
        }

        out.push_str("}\n");
        out
    }
}
