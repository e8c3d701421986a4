//! One bucket of daily bars reduced to a single candle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::daily_bar::DailyBar;

/// A weekly, monthly or daily candle derived from [`DailyBar`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedBar {
    /// Canonical date of the bucket: Monday of the week, first day of the
    /// month, or the trading date itself for daily passthrough.
    pub bucket_key: NaiveDate,

    /// Open of the chronologically earliest member.
    pub open: f64,

    /// Maximum high across members.
    pub high: f64,

    /// Minimum low across members.
    pub low: f64,

    /// Close of the chronologically latest member.
    pub close: f64,

    /// Sum of member volumes.
    pub volume: f64,

    /// Number of daily bars reduced into this bucket.
    pub bar_count: usize,
}

impl AggregatedBar {
    /// Reduce a bucket whose members are already sorted by date.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_sorted(bucket_key: NaiveDate, members: &[DailyBar]) -> Option<Self> {
        let first = members.first()?;
        let last = members.last()?;
        let mut high = first.high;
        let mut low = first.low;
        let mut volume = 0.0_f64;
        for bar in members {
            high = high.max(bar.high);
            low = low.min(bar.low);
            volume += bar.volume;
        }
        Some(Self {
            bucket_key,
            open: first.open,
            high,
            low,
            close: last.close,
            volume,
            bar_count: members.len(),
        })
    }
}
