use candle_aggregator::DailyBar;
use serde::Serialize;

use crate::normalize::NormalizeError;

/// Daily bars of one instrument, already in canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    /// Backend id of the instrument.
    pub stock_item_id: u64,
    /// Display name, when the backend sent one.
    pub stock_name: Option<String>,
    /// Normalized bars in the order the backend returned them.
    pub bars: Vec<DailyBar>,
    /// Rows that could not be normalized.
    pub skipped: Vec<NormalizeError>,
}
