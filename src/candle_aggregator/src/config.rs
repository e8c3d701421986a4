//! Aggregator configuration: parsing, defaults, and loading.
//!
//! The configuration is a small TOML document passed explicitly to
//! [`Aggregator::new`](crate::aggregate::Aggregator::new). Every key is
//! optional; unknown keys are rejected so typos surface at load time.
//!
//! ```toml
//! policy = "drop"          # or "abort" (default)
//!
//! [windows]
//! daily = 60
//! weekly = 52
//! monthly = 24
//! ```
//!
//! Entrypoints:
//! - Parse + check from a TOML string: [`load_config_str`]
//! - Parse + check from a file path: [`load_config_path`]

use std::{fmt, str::FromStr};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::models::period::Period;

/// What to do with a bar that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidBarPolicy {
    /// Fail the whole aggregation on the first invalid bar.
    #[default]
    Abort,
    /// Leave invalid bars out and list them in the report.
    Drop,
}

impl fmt::Display for InvalidBarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidBarPolicy::Abort => f.write_str("abort"),
            InvalidBarPolicy::Drop => f.write_str("drop"),
        }
    }
}

impl FromStr for InvalidBarPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(InvalidBarPolicy::Abort),
            "drop" => Ok(InvalidBarPolicy::Drop),
            other => bail!("unknown invalid-bar policy: {other}"),
        }
    }
}

/// Trailing display window per period, in buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayWindows {
    pub daily: usize,
    pub weekly: usize,
    pub monthly: usize,
}

impl Default for DisplayWindows {
    fn default() -> Self {
        Self {
            daily: 60,
            weekly: 52,
            monthly: 24,
        }
    }
}

impl DisplayWindows {
    /// Maximum number of most recent buckets shown for `period`.
    pub fn limit(&self, period: Period) -> usize {
        match period {
            Period::Daily => self.daily,
            Period::Weekly => self.weekly,
            Period::Monthly => self.monthly,
        }
    }
}

/// Top-level aggregator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregatorConfig {
    /// Handling of bars that fail validation.
    pub policy: InvalidBarPolicy,
    /// Display window sizes.
    pub windows: DisplayWindows,
}

impl AggregatorConfig {
    /// Same configuration with a different policy.
    pub fn with_policy(self, policy: InvalidBarPolicy) -> Self {
        Self { policy, ..self }
    }

    /// Reject values that parse but cannot be used.
    ///
    /// Errors:
    /// - a display window of zero buckets
    pub fn check(&self) -> anyhow::Result<()> {
        for period in Period::ALL {
            if self.windows.limit(period) == 0 {
                bail!("display window for {period} must hold at least one bucket");
            }
        }
        Ok(())
    }
}

/// Parse and check an aggregator configuration from a TOML string.
///
/// Errors:
/// - TOML parse failures (including unknown keys)
/// - check failures (see [`AggregatorConfig::check`])
pub fn load_config_str(toml_str: &str) -> anyhow::Result<AggregatorConfig> {
    let cfg: AggregatorConfig =
        toml::from_str(toml_str).context("failed to parse aggregator config TOML")?;
    cfg.check().context("invalid aggregator config")?;
    Ok(cfg)
}

/// Read an aggregator configuration file from disk, parse, and check it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<AggregatorConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read aggregator config {}", path.as_ref().display()))?;
    load_config_str(&text)
}
