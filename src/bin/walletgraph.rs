// ─────────────────────────────────────────────────────────────────────────────
//  Walletgraph — Wallet Interaction Analyzer
//
//  Maps the transaction history between a set of tracked wallets into an
//  interaction graph: who moved value to whom, how often, and how much,
//  across every configured network.
//
//  Designed to make wallet relationships visible at a glance.
// ─────────────────────────────────────────────────────────────────────────────

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Duration;
use chrono::NaiveDate;
use chrono::NaiveTime;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use tracing::info;

use walletgraph::config::load_config;
use walletgraph::config::Config;
use walletgraph::config::NetworkRegistry;
use walletgraph::config::SourceMode;
use walletgraph::engine::AnalysisRequest;
use walletgraph::engine::Analyzer;
use walletgraph::error::Context;
use walletgraph::error::Result;
use walletgraph::pipeline::AnalysisReport;
use walletgraph::pipeline::InteractionFilter;
use walletgraph::pipeline::SortSpec;
use walletgraph::tracing::setup_tracing;
use walletgraph::utils::format_units_4dp;

#[derive(Parser)]
#[command(name = "walletgraph", version, about = "Wallet interaction analyzer")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "Config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan networks for transactions between the tracked wallets
    Analyze(AnalyzeArgs),
    /// List the configured networks
    Networks,
}

#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Tracked wallet address, repeat for each wallet (at least two)
    #[arg(long = "wallet", required = true)]
    wallets: Vec<String>,

    /// Network ids to scan; defaults to every configured network
    #[arg(long = "networks", value_delimiter = ',')]
    networks: Vec<String>,

    /// Transaction source override for this run
    #[arg(long, value_enum)]
    mode: Option<SourceMode>,

    /// Also scan the token-transfer feed
    #[arg(long)]
    include_tokens: bool,

    /// Keep only interactions on this network id
    #[arg(long)]
    filter_network: Option<String>,

    /// Keep only interactions whose sender contains this text
    #[arg(long)]
    filter_from: Option<String>,

    /// Keep only interactions whose receiver contains this text
    #[arg(long)]
    filter_to: Option<String>,

    /// Keep only interactions on or after this date (YYYY-MM-DD)
    #[arg(long)]
    after: Option<NaiveDate>,

    /// Keep only interactions on or before this date (YYYY-MM-DD)
    #[arg(long)]
    before: Option<NaiveDate>,

    /// Sort order as field:direction, e.g. value:desc
    #[arg(long, default_value = "date:desc")]
    sort: SortSpec,

    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Dot,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    setup_tracing("walletgraph", &config.logging);

    match cli.command {
        Command::Analyze(args) => run_analysis(config, args).await,
        Command::Networks => {
            print!("{}", render_networks(&config.networks));
            Ok(())
        },
    }
}

async fn run_analysis(
    config: Config,
    args: AnalyzeArgs,
) -> Result<()> {
    let networks = if args.networks.is_empty() {
        config.networks.ids().iter().map(|id| id.to_string()).collect()
    } else {
        args.networks.clone()
    };

    let request = AnalysisRequest {
        wallets: args.wallets.clone(),
        networks,
        include_tokens: args.include_tokens,
        filter: InteractionFilter {
            network: args.filter_network.clone(),
            from_contains: args.filter_from.clone(),
            to_contains: args.filter_to.clone(),
            after: args.after.map(|date| date.and_time(NaiveTime::MIN).and_utc()),
            before: args
                .before
                .map(|date| date.and_time(NaiveTime::MIN).and_utc() + Duration::seconds(86_399)),
            include_token_transfers: true,
        },
        sort: args.sort,
        mode: args.mode,
    };

    let analyzer = Analyzer::new(config)?;

    let report = tokio::select! {
        result = analyzer.analyze(&request) => result.context("analysis failed")?,
        _ = tokio::signal::ctrl_c() => {
            info!("analysis_interrupted::ctrl_c");
            return Ok(());
        },
    };

    let rendered = match args.format {
        OutputFormat::Table => render_table(&report, &analyzer.config.networks),
        OutputFormat::Json => {
            let mut body = serde_json::to_string_pretty(&report).context("serializing report")?;
            body.push('\n');
            body
        },
        OutputFormat::Dot => report.graph.to_dot(),
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered).with_context(|| format!("writing {}", path.display()))?;
            info!("report_written::{}", path.display());
        },
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render_networks(networks: &NetworkRegistry) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<2} {:<13} {:<16} {:<42} {:<34} {}\n",
        "", "ID", "NAME", "API", "EXPLORER", "CREDENTIAL"
    ));

    for network in &networks.networks {
        let credential = if network.resolve_api_key().is_some() { "yes" } else { "no" };
        out.push_str(&format!(
            "{:<2} {:<13} {:<16} {:<42} {:<34} {}\n",
            network.icon, network.id, network.name, network.api_url, network.explorer_url, credential
        ));
    }

    out
}

fn short_address(address: &str) -> String {
    if address.len() > 12 {
        format!("{}..{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

fn render_table(
    report: &AnalysisReport,
    networks: &NetworkRegistry,
) -> String {
    let mut out = String::new();

    // Deep links resolve against the first scanned network
    let link_network = report.scans.first().and_then(|scan| networks.get(&scan.network));

    out.push_str("Tracked wallets\n");
    for (index, wallet) in report.wallets.iter().enumerate() {
        match link_network {
            Some(network) => {
                out.push_str(&format!("  Wallet {:<2} {}  {}\n", index + 1, wallet, network.address_url(wallet)));
            },
            None => {
                out.push_str(&format!("  Wallet {:<2} {}\n", index + 1, wallet));
            },
        }
    }

    out.push_str("\nScans\n");
    for scan in &report.scans {
        out.push_str(&format!("  {:<12} {}\n", scan.network, scan.outcome));
    }

    out.push_str(&format!("\nInteractions ({})\n", report.interactions.len()));
    if !report.interactions.is_empty() {
        out.push_str(&format!(
            "  {:<17} {:<12} {:<13} {:<13} {}\n",
            "DATE", "NETWORK", "FROM", "TO", "AMOUNT"
        ));
    }
    for interaction in &report.interactions {
        let date = match interaction.date() {
            Some(date) => date.format("%Y-%m-%d %H:%M").to_string(),
            None => interaction.timestamp.to_string(),
        };
        let symbol = interaction
            .token_symbol
            .as_deref()
            .unwrap_or_else(|| networks.native_symbol(&interaction.network));
        let amount = match interaction.value_wei() {
            Some(value) => format!("{} {}", format_units_4dp(value, interaction.display_decimals()), symbol),
            None => format!("{} {} (raw)", interaction.value, symbol),
        };
        out.push_str(&format!(
            "  {:<17} {:<12} {:<13} {:<13} {}\n",
            date,
            interaction.network,
            short_address(&interaction.from),
            short_address(&interaction.to),
            amount
        ));
    }

    let labels: HashMap<&str, &str> = report
        .graph
        .nodes
        .iter()
        .map(|node| (node.address.as_str(), node.label.as_str()))
        .collect();

    out.push_str(&format!(
        "\nGraph ({} wallets, {} flows)\n",
        report.graph.nodes.len(),
        report.graph.edges.len()
    ));
    for edge in &report.graph.edges {
        let from = labels.get(edge.from.as_str()).copied().unwrap_or(edge.from.as_str());
        let to = labels.get(edge.to.as_str()).copied().unwrap_or(edge.to.as_str());
        out.push_str(&format!(
            "  {} -> {}  {} over {} txs on {}\n",
            from,
            to,
            edge.label,
            edge.hashes.len(),
            edge.network_name
        ));
    }

    out
}
