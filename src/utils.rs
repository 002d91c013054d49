use std::time::Duration;

use alloy_primitives::U256;
use rand::Rng;

use crate::constants::AMOUNT_LABEL_DECIMALS;
use crate::constants::NATIVE_DECIMALS;

/// Parse a base-10 wei amount as explorer APIs return it.
///
/// Rejects anything that is not a plain run of ASCII digits, so signs,
/// decimal points and hex prefixes all come back as `None`.
pub fn parse_wei(value: &str) -> Option<U256> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(trimmed, 10).ok()
}

/// Scale a raw amount by `decimals` and render it with four fractional
/// digits, truncating toward zero ("1.5000").
pub fn format_units_4dp(
    value: U256,
    decimals: u8,
) -> String {
    let ten = U256::from(10u64);
    let Some(scale) = ten.checked_pow(U256::from(decimals)) else {
        return "0.0000".to_string();
    };

    let whole = value / scale;
    let remainder = value % scale;
    // remainder * 10^4 / scale keeps exactly four truncated digits
    let frac = remainder
        .checked_mul(U256::from(10u64.pow(AMOUNT_LABEL_DECIMALS)))
        .map(|scaled| (scaled / scale).as_limbs()[0])
        .unwrap_or(0);

    format!("{whole}.{frac:04}")
}

/// Render a wei amount in native currency units, e.g. "1.5000 ETH".
pub fn format_native_amount(
    value: U256,
    symbol: &str,
) -> String {
    format!("{} {}", format_units_4dp(value, NATIVE_DECIMALS), symbol)
}

/// Calculate backoff with jitter for transient explorer failures.
/// The delay grows 3x per attempt, capped and then jittered by ±25%.
pub fn calculate_backoff_with_jitter(
    attempt: usize,
    base_delay_ms: u64,
    max_delay_ms: u64,
) -> Duration {
    let exponential_delay = base_delay_ms.saturating_mul(3u64.saturating_pow(attempt as u32));

    let capped_delay = exponential_delay.min(max_delay_ms);

    let mut rng = rand::rng();
    let jitter_range = (capped_delay as f64 * 0.25) as u64;
    let jitter = rng.random_range(0..=jitter_range * 2);
    let final_delay = capped_delay.saturating_add(jitter).saturating_sub(jitter_range);

    Duration::from_millis(final_delay)
}

/// Check if an error message indicates a rate limit or timeout that should be retried
pub fn is_retryable_error(error_msg: &str) -> bool {
    error_msg.contains("429") // Rate limit
        || error_msg.contains("timed out")
        || error_msg.contains("operation timed out")
        || error_msg.contains("timeout")
        || error_msg.contains("connection reset")
        || error_msg.contains("connection refused")
        || error_msg.contains("Too Many Requests")
        || error_msg.contains("rate limit")
}
