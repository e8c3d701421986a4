//! Chart periods the aggregator can bucket daily bars into.
//!
//! Display/parse follow the compact timeframe notation (`"1D"`, `"1W"`,
//! `"1M"`); word forms (`"weekly"`, `"month"`, ...) are accepted as well for
//! CLI and config ergonomics.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown period: {input:?} (expected daily, weekly or monthly)")]
pub struct PeriodParseError {
    pub input: String,
}

/// Calendar granularity of an aggregated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// one bucket per trading day (passthrough)
    Daily,
    /// Monday-based weeks
    Weekly,
    /// calendar months
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Period::Daily => "1D",
            Period::Weekly => "1W",
            Period::Monthly => "1M",
        };
        f.write_str(s)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // "1m" is minutes in most charting vocabularies, so months need an upper-case M
        match trimmed {
            "1D" | "1d" | "D" => return Ok(Period::Daily),
            "1W" | "1w" | "W" => return Ok(Period::Weekly),
            "1M" | "M" | "1mo" => return Ok(Period::Monthly),
            _ => {}
        }
        match trimmed.to_lowercase().as_str() {
            "daily" | "day" => Ok(Period::Daily),
            "weekly" | "week" => Ok(Period::Weekly),
            "monthly" | "month" => Ok(Period::Monthly),
            _ => Err(PeriodParseError {
                input: s.to_string(),
            }),
        }
    }
}
