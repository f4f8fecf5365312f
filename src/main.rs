//! CLI entrypoint: parse flags, load config and keys, run the sweep.

use alloy::primitives::U256;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nft_sweeper::chain::{ChainClient, TransferSender};
use nft_sweeper::config::{load_config, SweeperConfig};
use nft_sweeper::indexer::IndexerClient;
use nft_sweeper::keystore;
use nft_sweeper::sweep::{self, SweepPlanner};

#[derive(Parser)]
#[command(name = "nft-sweeper")]
#[command(about = "Batch-transfer NFTs from a list of wallets to one target address", long_about = None)]
struct Cli {
    /// TOML config file; compiled-in defaults apply otherwise.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Key file override (one private key per line).
    #[arg(short, long)]
    keys: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nft_sweeper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SweeperConfig::default(),
    };

    tracing::info!(
        rpc_url = %config.chain.rpc_url,
        collection = %config.transfer.collection,
        recipient = %config.transfer.recipient,
        "Configuration loaded"
    );

    let keys_path = cli
        .keys
        .unwrap_or_else(|| PathBuf::from(&config.transfer.keys_file));
    let wallets = keystore::load_wallets(&keys_path, config.chain.chain_id)?;
    tracing::info!(wallets = wallets.len(), "Key file loaded");

    let client = ChainClient::new(config.chain.clone()).await?;
    let indexer = IndexerClient::new(&config.indexer)?;

    let planner = SweepPlanner::new(&indexer, &config.transfer.collection);
    let plan = planner.build_plan(wallets).await;

    let sender = TransferSender::new(client, &config)?;
    let gas_cost = U256::from(config.gas.price_wei()) * U256::from(config.gas.limit);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    sweep::run(&plan, &sender, gas_cost, &mut input, &mut output).await?;

    Ok(())
}
