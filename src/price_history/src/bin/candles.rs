use std::path::PathBuf;

use anyhow::Result;
use candle_aggregator::{InvalidBarPolicy, Period};
use clap::{Args, Parser, Subcommand};
use price_history::{
    BackendRestProvider, ClientConfig, PriceHistoryProvider,
    pipeline::{RunOptions, read_rows, run},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Aggregate daily stock prices into weekly and monthly candles")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Aggregate daily rows read from a JSON file
    Aggregate {
        /// JSON array of daily price rows (or a `{ "data": [...] }` envelope)
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        #[command(flatten)]
        opts: AggregateOpts,
    },

    /// Fetch daily rows from the backend and aggregate them
    Fetch {
        #[arg(long)]
        stock_item_id: u64,
        #[command(flatten)]
        opts: AggregateOpts,
    },
}

#[derive(Args)]
struct AggregateOpts {
    /// Target period: daily, weekly or monthly (also 1D, 1W, 1M)
    #[arg(long)]
    period: Period,

    /// Aggregator settings (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the policy from the config file: abort or drop
    #[arg(long)]
    policy: Option<InvalidBarPolicy>,

    /// Print every bucket instead of the display window
    #[arg(long)]
    full: bool,
}

impl From<AggregateOpts> for RunOptions {
    fn from(opts: AggregateOpts) -> Self {
        RunOptions {
            period: opts.period,
            config: opts.config,
            policy: opts.policy,
            full: opts.full,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the JSON result, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let ((bars, skipped), opts) = match cli.cmd {
        Cmd::Aggregate { input, opts } => (read_rows(&input)?, opts),
        Cmd::Fetch {
            stock_item_id,
            opts,
        } => {
            let config = ClientConfig::from_env()?;
            let provider = BackendRestProvider::new(&config)?;
            let series = provider.fetch_daily(stock_item_id).await?;
            info!(
                stock_item_id,
                stock_name = series.stock_name.as_deref().unwrap_or("-"),
                "aggregating fetched series"
            );
            ((series.bars, series.skipped), opts)
        }
    };

    let output = run(&bars, skipped, &opts.into())?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
