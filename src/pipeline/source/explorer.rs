use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use super::SourceBatch;
use super::TransactionSource;
use crate::config::AnalyzerConfig;
use crate::config::NetworkConfig;
use crate::constants::EXPLORER_END_BLOCK;
use crate::constants::EXPLORER_SORT_ORDER;
use crate::constants::EXPLORER_START_BLOCK;
use crate::err_with_loc;
use crate::error::Result;
use crate::error::SourceError;
use crate::model::WalletSet;
use crate::pipeline::extract::extract_interactions;
use crate::utils::calculate_backoff_with_jitter;
use crate::utils::is_retryable_error;

/// The two Etherscan-style account feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxFeed {
    Native,
    Token,
}

impl TxFeed {
    pub fn action(&self) -> &'static str {
        match self {
            TxFeed::Native => "txlist",
            TxFeed::Token => "tokentx",
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, TxFeed::Token)
    }
}

/// One transaction row as Etherscan-style APIs return it. Every field is
/// a string on the wire; numeric parsing happens during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: String,
    #[serde(default)]
    pub from: String,
    /// Empty for contract creations
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: String,
    #[serde(rename = "blockNumber", default)]
    pub block_number: String,
    #[serde(rename = "tokenSymbol", default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(rename = "tokenName", default, skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,
    #[serde(rename = "tokenDecimal", default, skip_serializing_if = "Option::is_none")]
    pub token_decimal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[serde(default)]
    message: String,
    result: ExplorerResult,
}

/// `result` is a transaction list on success and a bare message string on
/// most API-level errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExplorerResult {
    Transactions(Vec<RawTransaction>),
    Message(String),
}

/// Live source backed by the per-network block explorer HTTP APIs.
pub struct ExplorerClient {
    http: Client,
    max_retries: usize,
    base_retry_delay_ms: u64,
    max_retry_delay_ms: u64,
}

impl ExplorerClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| err_with_loc!(SourceError::ClientError(e.to_string())))?;

        Ok(Self {
            http,
            max_retries: config.max_retries,
            base_retry_delay_ms: config.base_retry_delay_ms,
            max_retry_delay_ms: config.max_retry_delay_ms,
        })
    }

    /// One feed for one address, retrying transient failures with backoff.
    async fn fetch_feed(
        &self,
        network: &NetworkConfig,
        address: &str,
        feed: TxFeed,
    ) -> Result<Vec<RawTransaction>> {
        let mut attempt = 0;
        loop {
            match self.request_once(network, address, feed).await {
                Ok(transactions) => return Ok(transactions),
                Err(e) if attempt < self.max_retries && is_retryable_error(&e.to_string()) => {
                    let delay =
                        calculate_backoff_with_jitter(attempt, self.base_retry_delay_ms, self.max_retry_delay_ms);
                    debug!(
                        "explorer_retry::{}::{}::attempt::{}::delay_ms::{}",
                        network.id,
                        feed.action(),
                        attempt + 1,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                },
                Err(e) => return Err(e),
            }
        }
    }

    async fn request_once(
        &self,
        network: &NetworkConfig,
        address: &str,
        feed: TxFeed,
    ) -> Result<Vec<RawTransaction>> {
        let mut params = vec![
            ("module", "account".to_string()),
            ("action", feed.action().to_string()),
            ("address", address.to_string()),
            ("startblock", EXPLORER_START_BLOCK.to_string()),
            ("endblock", EXPLORER_END_BLOCK.to_string()),
            ("sort", EXPLORER_SORT_ORDER.to_string()),
        ];
        if let Some(key) = network.resolve_api_key() {
            params.push(("apikey", key));
        } else {
            debug!("explorer_no_credential::{}", network.id);
        }

        let response = self
            .http
            .get(&network.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| err_with_loc!(SourceError::RequestFailed(format!("{}: {}", network.api_url, e))))?;

        if !response.status().is_success() {
            return Err(err_with_loc!(SourceError::RequestFailed(format!(
                "{} returned {}",
                network.api_url,
                response.status()
            ))));
        }

        let body: ExplorerResponse = response
            .json()
            .await
            .map_err(|e| err_with_loc!(SourceError::DecodeError(e.to_string())))?;

        match body.result {
            ExplorerResult::Transactions(transactions) => Ok(transactions),
            ExplorerResult::Message(detail) => {
                // An empty account is a normal answer, not a failure
                if body.status == "0"
                    && (body.message.contains("No transactions found") || detail.contains("No transactions found"))
                {
                    debug!("explorer_empty::{}::{}::address::{}", network.id, feed.action(), address);
                    Ok(Vec::new())
                } else {
                    Err(err_with_loc!(SourceError::ApiError(format!("{}: {}", body.message, detail))))
                }
            },
        }
    }
}

#[async_trait]
impl TransactionSource for ExplorerClient {
    /// Scans every tracked wallet on one network. A failed request is
    /// logged and contributes an empty list; the scan itself never aborts.
    async fn scan(
        &self,
        wallets: &WalletSet,
        network: &NetworkConfig,
        include_tokens: bool,
    ) -> Result<SourceBatch> {
        let mut batch = SourceBatch::default();
        let mut seen: HashSet<(String, bool)> = HashSet::new();

        let mut feeds = vec![TxFeed::Native];
        if include_tokens {
            feeds.push(TxFeed::Token);
        }

        for feed in feeds {
            let mut pooled = Vec::new();
            for wallet in wallets.iter() {
                match self.fetch_feed(network, wallet.as_str(), feed).await {
                    Ok(transactions) => {
                        debug!(
                            "explorer_fetched::{}::{}::address::{}::transactions::{}",
                            network.id,
                            feed.action(),
                            wallet,
                            transactions.len()
                        );
                        for tx in transactions {
                            if seen.insert((tx.hash.clone(), feed.is_token())) {
                                pooled.push(tx);
                            }
                        }
                    },
                    Err(e) => {
                        warn!(
                            "explorer_fetch_failed::{}::{}::address::{}::error::{}",
                            network.id,
                            feed.action(),
                            wallet,
                            e
                        );
                    },
                }
            }

            batch.transactions += pooled.len();
            batch
                .interactions
                .extend(extract_interactions(&pooled, wallets, network, feed.is_token()));
        }

        Ok(batch)
    }
}
