/// ======================= Analysis bounds =======================
/// Minimum number of validated wallets for a meaningful interaction graph
pub const MIN_TRACKED_WALLETS: usize = 2;

/// Networks fetched live per analysis before remaining scans are skipped
/// or synthesized, depending on the source mode
pub const DEFAULT_REAL_FETCH_CAP: usize = 3;

/// ======================= Explorer API =======================
pub const EXPLORER_START_BLOCK: &str = "0";

pub const EXPLORER_END_BLOCK: &str = "99999999";

pub const EXPLORER_SORT_ORDER: &str = "desc";

/// ======================= Value formatting =======================
/// Native currency decimals shared by the supported EVM chains
pub const NATIVE_DECIMALS: u8 = 18;

/// Fractional digits rendered in amount labels
pub const AMOUNT_LABEL_DECIMALS: u32 = 4;

pub const FALLBACK_NATIVE_SYMBOL: &str = "ETH";

/// ======================= Graph layout =======================
pub const DEFAULT_NODE_SPACING: f64 = 250.0;

/// All wallet nodes sit on a single horizontal row
pub const GRAPH_ROW_Y: f64 = 100.0;

/// Edge color when the network is missing from the registry
pub const DEFAULT_EDGE_COLOR: &str = "#646cff";

/// ======================= Synthetic data =======================
/// Token vocabulary for synthetic token transfers: symbol, name, decimals
pub const SYNTHETIC_TOKENS: [(&str, &str, u8); 6] = [
    ("USDT", "Tether USD", 6),
    ("USDC", "USD Coin", 6),
    ("DAI", "Dai Stablecoin", 18),
    ("LINK", "ChainLink Token", 18),
    ("UNI", "Uniswap", 18),
    ("WETH", "Wrapped Ether", 18),
];

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Synthetic transfer bounds in wei (0.001 to 5 native units)
pub const SYNTHETIC_MIN_WEI: u64 = 1_000_000_000_000_000;

pub const SYNTHETIC_MAX_WEI: u64 = 5_000_000_000_000_000_000;
