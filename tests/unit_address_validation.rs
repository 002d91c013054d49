use proptest::prelude::*;
use rstest::*;

use walletgraph::model::is_valid_address;
use walletgraph::model::WalletAddress;
use walletgraph::model::WalletSet;
use walletgraph::testing::fixtures::WALLET_ONE;
use walletgraph::testing::fixtures::WALLET_TWO;

mod address_validation_tests {
    use super::*;

    #[rstest]
    #[case::lowercase("0x742d35cc6634c0532925a3b844bc454e4438f44e")]
    #[case::mixed_case("0x742d35Cc6634C0532925a3b844Bc454e4438f44e")]
    #[case::uppercase("0x742D35CC6634C0532925A3B844BC454E4438F44E")]
    #[case::all_zero("0x0000000000000000000000000000000000000000")]
    fn test_accepts_well_formed_addresses(#[case] address: &str) {
        assert!(is_valid_address(address), "should accept {address}");
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_prefix("742d35Cc6634C0532925a3b844Bc454e4438f44e")]
    #[case::uppercase_prefix("0X742d35Cc6634C0532925a3b844Bc454e4438f44e")]
    #[case::too_short("0x742d35Cc6634C0532925a3b844Bc454e4438f44")]
    #[case::too_long("0x742d35Cc6634C0532925a3b844Bc454e4438f44ea")]
    #[case::non_hex_digit("0x742d35Cc6634C0532925a3b844Bc454e4438f44g")]
    #[case::inner_whitespace("0x742d35Cc6634C0532925a3b8 4Bc454e4438f44e")]
    #[case::prefix_only("0x")]
    #[case::ens_name("vitalik.eth")]
    fn test_rejects_malformed_addresses(#[case] address: &str) {
        assert!(!is_valid_address(address), "should reject {address:?}");
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let address = WalletAddress::parse(WALLET_ONE).unwrap();
        assert_eq!(address.as_str(), WALLET_ONE.to_lowercase());
        assert_eq!(address.to_string(), WALLET_ONE.to_lowercase());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let padded = format!("  {WALLET_ONE}\n");
        let address = WalletAddress::parse(&padded).unwrap();
        assert_eq!(address.as_str(), WALLET_ONE.to_lowercase());
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        let err = WalletAddress::parse("not-an-address").unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}

mod wallet_set_tests {
    use super::*;

    #[test]
    fn test_preserves_first_seen_order() {
        let set = WalletSet::from_raw([WALLET_TWO, WALLET_ONE]);
        let ordered: Vec<&str> = set.iter().map(WalletAddress::as_str).collect();
        assert_eq!(ordered, vec![WALLET_TWO.to_lowercase(), WALLET_ONE.to_lowercase()]);
    }

    #[test]
    fn test_deduplicates_case_insensitively() {
        let shouty = WALLET_ONE.to_uppercase().replace("0X", "0x");
        let set = WalletSet::from_raw([WALLET_ONE, shouty.as_str(), WALLET_TWO]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_drops_invalid_entries() {
        let set = WalletSet::from_raw([WALLET_ONE, "nonsense", WALLET_TWO]);
        assert_eq!(set.len(), 2);
        assert!(!set.contains("nonsense"));
    }

    #[test]
    fn test_membership_ignores_case_and_padding() {
        let set = WalletSet::from_raw([WALLET_ONE]);
        let shouty = WALLET_ONE.to_uppercase().replace("0X", "0x");
        assert!(set.contains(&WALLET_ONE.to_lowercase()));
        assert!(set.contains(&format!("  {shouty}  ")));
        assert!(!set.contains(WALLET_TWO));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = WalletSet::new();
        let address = WalletAddress::parse(WALLET_ONE).unwrap();
        assert!(set.insert(address.clone()));
        assert!(!set.insert(address));
        assert_eq!(set.len(), 1);
    }
}

proptest! {
    /// Forty hex digits behind the prefix always validate, regardless of
    /// the case mix.
    #[test]
    fn prop_valid_hex_always_accepted(digits in "[0-9a-fA-F]{40}") {
        prop_assert!(is_valid_address(&format!("0x{digits}")));
    }

    /// Any length other than forty digits is rejected.
    #[test]
    fn prop_wrong_length_always_rejected(digits in "[0-9a-f]{0,60}") {
        prop_assume!(digits.len() != 40);
        prop_assert!(!is_valid_address(&format!("0x{digits}")));
    }

    /// Parsing never panics on arbitrary input.
    #[test]
    fn prop_parse_total_on_arbitrary_input(raw in "\\PC*") {
        let _ = WalletAddress::parse(&raw);
    }
}
