//! Rows in, candles out: the steps behind the `candles` command.
//!
//! Rows that fail normalization are subject to the same
//! [`InvalidBarPolicy`] as bars that fail validation: under `Abort` the
//! first one fails the run, under `Drop` they are listed in
//! [`Output::skipped`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use candle_aggregator::{
    AggregatedBar, AggregationReport, Aggregator, AggregatorConfig, DailyBar, InvalidBarPolicy,
    Period, config::load_config_path,
};
use serde::Serialize;

use crate::{
    models::price_row::DailyPricesBody,
    normalize::{NormalizeError, normalize_rows},
};

/// How one aggregation run is configured.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub period: Period,
    /// Aggregator settings file (TOML).
    pub config: Option<PathBuf>,
    /// Overrides the policy from the config file.
    pub policy: Option<InvalidBarPolicy>,
    /// Every bucket instead of the display window.
    pub full: bool,
}

impl RunOptions {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            config: None,
            policy: None,
            full: false,
        }
    }
}

/// Printed result of a run.
#[derive(Debug, Serialize)]
pub struct Output {
    pub bars: Vec<AggregatedBar>,
    pub report: AggregationReport,
    /// Rows left out because they could not be normalized.
    pub skipped: Vec<NormalizeError>,
}

/// Read a JSON file of backend rows (bare list or `{ "data": [...] }`)
/// and normalize it.
pub fn read_rows(path: &Path) -> Result<(Vec<DailyBar>, Vec<NormalizeError>)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    let body: DailyPricesBody = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse price rows in {}", path.display()))?;
    Ok(normalize_rows(&body.into_rows()))
}

/// Config file (or defaults) with the `policy` override applied.
pub fn resolve_config(opts: &RunOptions) -> Result<AggregatorConfig> {
    let config = match &opts.config {
        Some(path) => load_config_path(path)?,
        None => AggregatorConfig::default(),
    };
    Ok(match opts.policy {
        Some(policy) => config.with_policy(policy),
        None => config,
    })
}

/// Aggregate normalized bars, applying the policy to `skipped` rows too.
pub fn run(bars: &[DailyBar], skipped: Vec<NormalizeError>, opts: &RunOptions) -> Result<Output> {
    let config = resolve_config(opts)?;

    if config.policy == InvalidBarPolicy::Abort {
        if let Some(first) = skipped.first() {
            bail!(
                "aggregation aborted, {first} ({} unreadable row(s))",
                skipped.len()
            );
        }
    }

    let aggregation = Aggregator::new(config).aggregate(bars, opts.period)?;
    let bars = if opts.full {
        aggregation.bars().to_vec()
    } else {
        aggregation.display().to_vec()
    };
    let (_, report) = aggregation.into_parts();

    Ok(Output {
        bars,
        report,
        skipped,
    })
}
