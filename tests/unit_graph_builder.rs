use pretty_assertions::assert_eq;

use walletgraph::config::NetworkRegistry;
use walletgraph::model::InteractionGraph;
use walletgraph::model::WalletSet;
use walletgraph::testing::fixtures::interaction;
use walletgraph::testing::fixtures::test_network;
use walletgraph::testing::fixtures::wallet_set;
use walletgraph::testing::fixtures::WALLET_ONE;
use walletgraph::testing::fixtures::WALLET_THREE;
use walletgraph::testing::fixtures::WALLET_TWO;

fn registry() -> NetworkRegistry {
    NetworkRegistry {
        networks: vec![test_network("ethereum", "https://api.etherscan.io/api")],
    }
}

mod layout_tests {
    use super::*;

    #[test]
    fn test_two_wallets_center_around_zero() {
        let graph = InteractionGraph::build(&wallet_set(), &[], 250.0);
        let export = graph.export(&registry());

        assert_eq!(export.nodes.len(), 2);
        assert_eq!(export.nodes[0].x, -125.0);
        assert_eq!(export.nodes[1].x, 125.0);
        assert!(export.nodes.iter().all(|n| n.y == 100.0));
    }

    #[test]
    fn test_three_wallets_spread_by_spacing() {
        let wallets = WalletSet::from_raw([WALLET_ONE, WALLET_TWO, WALLET_THREE]);
        let graph = InteractionGraph::build(&wallets, &[], 250.0);
        let export = graph.export(&registry());

        let xs: Vec<f64> = export.nodes.iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![-250.0, 0.0, 250.0]);
    }

    #[test]
    fn test_labels_follow_input_order() {
        let wallets = WalletSet::from_raw([WALLET_TWO, WALLET_ONE]);
        let graph = InteractionGraph::build(&wallets, &[], 250.0);
        let export = graph.export(&registry());

        assert_eq!(export.nodes[0].label, "Wallet 1");
        assert_eq!(export.nodes[0].address, WALLET_TWO.to_lowercase());
        assert_eq!(export.nodes[1].label, "Wallet 2");
        assert_eq!(export.nodes[1].address, WALLET_ONE.to_lowercase());
    }

    #[test]
    fn test_every_tracked_wallet_gets_a_node_without_traffic() {
        let interactions = vec![interaction("0x1", WALLET_ONE, WALLET_TWO, "1000", 1)];
        let wallets = WalletSet::from_raw([WALLET_ONE, WALLET_TWO, WALLET_THREE]);
        let graph = InteractionGraph::build(&wallets, &interactions, 250.0);

        assert_eq!(graph.node_count(), 3, "idle wallets still appear");
        assert_eq!(graph.edge_count(), 1);
    }
}

mod edge_tests {
    use super::*;

    #[test]
    fn test_opposite_directions_stay_separate() {
        let interactions = vec![
            interaction("0x1", WALLET_ONE, WALLET_TWO, "1000", 1),
            interaction("0x2", WALLET_TWO, WALLET_ONE, "2000", 2),
        ];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&registry());

        assert_eq!(export.edges.len(), 2);
        let forward = export
            .edges
            .iter()
            .find(|e| e.from == WALLET_ONE.to_lowercase())
            .expect("forward edge");
        let backward = export
            .edges
            .iter()
            .find(|e| e.from == WALLET_TWO.to_lowercase())
            .expect("backward edge");
        assert_eq!(forward.total_wei, "1000");
        assert_eq!(backward.total_wei, "2000");
    }

    #[test]
    fn test_repeated_pair_accumulates_into_one_edge() {
        let one_eth = "1000000000000000000";
        let half_eth = "500000000000000000";
        let interactions = vec![
            interaction("0x1", WALLET_ONE, WALLET_TWO, one_eth, 1),
            interaction("0x2", WALLET_ONE, WALLET_TWO, half_eth, 2),
        ];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&registry());

        assert_eq!(export.edges.len(), 1);
        let edge = &export.edges[0];
        assert_eq!(edge.hashes, vec!["0x1", "0x2"]);
        assert_eq!(edge.total_wei, "1500000000000000000");
        assert_eq!(edge.label, "1.5000 ETH");
    }

    #[test]
    fn test_unparseable_value_keeps_hash_but_skips_sum() {
        let interactions = vec![
            interaction("0xgood", WALLET_ONE, WALLET_TWO, "1000", 1),
            interaction("0xbad", WALLET_ONE, WALLET_TWO, "12.5e9", 2),
        ];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&registry());

        let edge = &export.edges[0];
        assert_eq!(edge.hashes.len(), 2, "the transaction still counts");
        assert_eq!(edge.total_wei, "1000", "only the parseable value is summed");
    }

    #[test]
    fn test_labels_truncate_instead_of_rounding() {
        let interactions = vec![interaction("0x1", WALLET_ONE, WALLET_TWO, "1999999999999999999", 1)];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&registry());

        assert_eq!(export.edges[0].label, "1.9999 ETH");
    }

    #[test]
    fn test_mixed_case_endpoints_land_on_the_same_edge() {
        let upper = WALLET_ONE.to_uppercase().replace("0X", "0x");
        let interactions = vec![
            interaction("0x1", WALLET_ONE, WALLET_TWO, "100", 1),
            interaction("0x2", &upper, WALLET_TWO, "200", 2),
        ];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);

        assert_eq!(graph.edge_count(), 1);
        let export = graph.export(&registry());
        assert_eq!(export.edges[0].total_wei, "300");
    }

    #[test]
    fn test_untracked_endpoints_never_create_nodes() {
        let interactions = vec![interaction("0x1", WALLET_ONE, WALLET_THREE, "1000", 1)];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);

        assert_eq!(graph.node_count(), 2, "only tracked wallets appear");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_network_attribution_follows_first_transaction() {
        let mut on_polygon = interaction("0x2", WALLET_ONE, WALLET_TWO, "2000", 2);
        on_polygon.network = "polygon".to_string();
        on_polygon.network_name = "Polygon".to_string();
        let interactions = vec![interaction("0x1", WALLET_ONE, WALLET_TWO, "1000", 1), on_polygon];

        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&registry());

        let edge = &export.edges[0];
        assert_eq!(edge.network, "ethereum");
        assert_eq!(edge.network_name, "Ethereum");
        assert_eq!(edge.total_wei, "3000", "values still accumulate across networks");
    }

    #[test]
    fn test_export_resolves_color_and_explorer_link() {
        let interactions = vec![
            interaction("0xfirst", WALLET_ONE, WALLET_TWO, "1000", 1),
            interaction("0xsecond", WALLET_ONE, WALLET_TWO, "1000", 2),
        ];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&registry());

        let edge = &export.edges[0];
        assert_eq!(edge.color, "#646cff");
        assert_eq!(edge.explorer_tx_url.as_deref(), Some("https://ethereum.example.io/tx/0xfirst"));
    }

    #[test]
    fn test_unknown_network_falls_back_to_defaults() {
        let interactions = vec![interaction("0x1", WALLET_ONE, WALLET_TWO, "1000", 1)];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let export = graph.export(&NetworkRegistry::default());

        let edge = &export.edges[0];
        assert_eq!(edge.color, "#646cff");
        assert!(edge.label.ends_with(" ETH"));
        assert_eq!(edge.explorer_tx_url, None, "no registry entry, no deep link");
    }
}

mod dot_tests {
    use super::*;

    #[test]
    fn test_dot_renders_nodes_and_edges() {
        let interactions = vec![interaction("0x1", WALLET_ONE, WALLET_TWO, "1000000000000000000", 1)];
        let graph = InteractionGraph::build(&wallet_set(), &interactions, 250.0);
        let dot = graph.export(&registry()).to_dot();

        assert!(dot.starts_with("digraph wallet_interactions {"));
        assert!(dot.contains("rankdir = LR"));
        assert!(dot.contains(&format!("\"{}\" [label = \"Wallet 1\"]", WALLET_ONE.to_lowercase())));
        assert!(dot.contains(&format!(
            "\"{}\" -> \"{}\"",
            WALLET_ONE.to_lowercase(),
            WALLET_TWO.to_lowercase()
        )));
        assert!(dot.contains("label = \"1.0000 ETH\""));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_for_empty_graph_is_still_valid() {
        let dot = InteractionGraph::build(&WalletSet::new(), &[], 250.0).export(&registry()).to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
