use std::collections::HashSet;

use pretty_assertions::assert_eq;

use walletgraph::config::SourceMode;
use walletgraph::constants::SYNTHETIC_MAX_WEI;
use walletgraph::constants::SYNTHETIC_MIN_WEI;
use walletgraph::constants::SYNTHETIC_TOKENS;
use walletgraph::pipeline::source::SyntheticSource;
use walletgraph::pipeline::source::TxFeed;
use walletgraph::pipeline::TransactionSource;
use walletgraph::testing::fixtures::test_config;
use walletgraph::testing::fixtures::test_network;
use walletgraph::testing::fixtures::wallet_set;
use walletgraph::testing::fixtures::WALLET_ONE;
use walletgraph::testing::fixtures::WALLET_TWO;

mod tx_feed_tests {
    use super::*;

    #[test]
    fn test_feed_actions_match_explorer_api() {
        assert_eq!(TxFeed::Native.action(), "txlist");
        assert_eq!(TxFeed::Token.action(), "tokentx");
        assert!(!TxFeed::Native.is_token());
        assert!(TxFeed::Token.is_token());
    }
}

mod synthetic_source_tests {
    use super::*;

    fn source_with_seed(seed: Option<u64>) -> SyntheticSource {
        let mut config = test_config("http://unused.invalid", &["ethereum"]).analyzer;
        config.mode = SourceMode::Synthetic;
        config.seed = seed;
        SyntheticSource::new(&config)
    }

    #[test]
    fn test_two_wallets_yield_both_directions() {
        let source = source_with_seed(Some(42));
        let network = test_network("ethereum", "http://unused.invalid");

        let batch = tokio_test::block_on(source.scan(&wallet_set(), &network, false)).expect("scan");

        assert_eq!(batch.interactions.len(), 2);
        assert_eq!(batch.transactions, 2);

        let first = &batch.interactions[0];
        let second = &batch.interactions[1];
        assert_eq!(first.from, WALLET_ONE.to_lowercase());
        assert_eq!(first.to, WALLET_TWO.to_lowercase());
        assert_eq!(second.from, WALLET_TWO.to_lowercase());
        assert_eq!(second.to, WALLET_ONE.to_lowercase());
    }

    #[test]
    fn test_timestamps_step_one_day_newest_first() {
        let source = source_with_seed(Some(42));
        let network = test_network("ethereum", "http://unused.invalid");

        let batch = tokio_test::block_on(source.scan(&wallet_set(), &network, false)).expect("scan");

        let timestamps: Vec<i64> = batch.interactions.iter().map(|i| i.timestamp).collect();
        assert_eq!(timestamps[0] - timestamps[1], 86_400);
        assert_eq!(batch.interactions[0].block_number, (timestamps[0].max(0) / 12) as u64);
    }

    #[test]
    fn test_generated_records_are_plausible() {
        let source = source_with_seed(Some(42));
        let network = test_network("polygon", "http://unused.invalid");

        let batch = tokio_test::block_on(source.scan(&wallet_set(), &network, false)).expect("scan");

        let mut hashes = HashSet::new();
        for interaction in &batch.interactions {
            assert_eq!(interaction.hash.len(), 66, "0x plus 64 hex digits");
            assert!(interaction.hash.starts_with("0x"));
            assert!(hashes.insert(interaction.hash.clone()), "hashes must be unique");

            let wei: u64 = interaction.value.parse().expect("native value fits u64 range");
            assert!((SYNTHETIC_MIN_WEI..=SYNTHETIC_MAX_WEI).contains(&wei));

            assert_eq!(interaction.network, "polygon");
            assert!(!interaction.is_token_transfer);
        }
    }

    #[test]
    fn test_token_mode_adds_vocabulary_transfers() {
        let source = source_with_seed(Some(42));
        let network = test_network("ethereum", "http://unused.invalid");

        let batch = tokio_test::block_on(source.scan(&wallet_set(), &network, true)).expect("scan");

        assert_eq!(batch.interactions.len(), 4, "one native and one token per direction");
        let tokens: Vec<_> = batch.interactions.iter().filter(|i| i.is_token_transfer).collect();
        assert_eq!(tokens.len(), 2);

        for token in tokens {
            let symbol = token.token_symbol.as_deref().expect("token symbol present");
            let entry = SYNTHETIC_TOKENS
                .iter()
                .find(|(s, _, _)| *s == symbol)
                .unwrap_or_else(|| panic!("unknown token symbol {symbol}"));
            assert_eq!(token.token_decimals, Some(entry.2));
            assert!(token.token_name.is_some());
        }
    }

    #[test]
    fn test_rounds_multiply_the_output() {
        let mut config = test_config("http://unused.invalid", &["ethereum"]).analyzer;
        config.synthetic_rounds = 3;
        let source = SyntheticSource::new(&config);
        let network = test_network("ethereum", "http://unused.invalid");

        let batch = tokio_test::block_on(source.scan(&wallet_set(), &network, false)).expect("scan");

        assert_eq!(batch.interactions.len(), 6);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let network = test_network("ethereum", "http://unused.invalid");

        let first = tokio_test::block_on(source_with_seed(Some(7)).scan(&wallet_set(), &network, false)).expect("scan");
        let second = tokio_test::block_on(source_with_seed(Some(7)).scan(&wallet_set(), &network, false)).expect("scan");

        let first_hashes: Vec<_> = first.interactions.iter().map(|i| i.hash.clone()).collect();
        let second_hashes: Vec<_> = second.interactions.iter().map(|i| i.hash.clone()).collect();
        assert_eq!(first_hashes, second_hashes);

        let first_values: Vec<_> = first.interactions.iter().map(|i| i.value.clone()).collect();
        let second_values: Vec<_> = second.interactions.iter().map(|i| i.value.clone()).collect();
        assert_eq!(first_values, second_values);
    }

    #[test]
    fn test_same_seed_differs_across_networks() {
        let source = source_with_seed(Some(7));
        let ethereum = test_network("ethereum", "http://unused.invalid");
        let polygon = test_network("polygon", "http://unused.invalid");

        let eth = tokio_test::block_on(source.scan(&wallet_set(), &ethereum, false)).expect("scan");
        let pol = tokio_test::block_on(source.scan(&wallet_set(), &polygon, false)).expect("scan");

        assert_ne!(eth.interactions[0].hash, pol.interactions[0].hash);
    }

    #[test]
    fn test_single_wallet_produces_nothing() {
        let source = source_with_seed(Some(42));
        let network = test_network("ethereum", "http://unused.invalid");
        let wallets = walletgraph::model::WalletSet::from_raw([WALLET_ONE]);

        let batch = tokio_test::block_on(source.scan(&wallets, &network, false)).expect("scan");

        assert!(batch.interactions.is_empty(), "no pair, no interaction");
    }
}
