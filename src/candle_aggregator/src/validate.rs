//! Per-bar validation.
//!
//! A bar that breaks the OHLCV invariants is rejected on its own with a
//! [`ValidationError`]; it never reaches a bucket. Whether the rejection drops
//! the bar or fails the whole call is decided by
//! [`InvalidBarPolicy`](crate::config::InvalidBarPolicy).

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::daily_bar::DailyBar;

/// Numeric field of a [`DailyBar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarField {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl fmt::Display for BarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BarField::Open => "open",
            BarField::High => "high",
            BarField::Low => "low",
            BarField::Close => "close",
            BarField::Volume => "volume",
        };
        f.write_str(s)
    }
}

/// Why a bar was rejected.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BarViolation {
    #[error("{field} is not a finite number")]
    NonFinite { field: BarField },

    #[error("{field} must be positive, got {value}")]
    NonPositivePrice { field: BarField, value: f64 },

    #[error("volume must be non-negative, got {volume}")]
    NegativeVolume { volume: f64 },

    #[error("high {high} is below low {low}")]
    HighBelowLow { high: f64, low: f64 },

    #[error("open {open} is outside [{low}, {high}]")]
    OpenOutsideRange { open: f64, low: f64, high: f64 },

    #[error("close {close} is outside [{low}, {high}]")]
    CloseOutsideRange { close: f64, low: f64, high: f64 },

    /// Every bar sharing the date is rejected, whichever came first.
    #[error("date appears more than once in the series")]
    DuplicateDate,

    #[error("date is too close to the calendar limits to be bucketed")]
    DateOutOfRange,
}

/// A rejected bar: its position in the caller's input, its date and the reason.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[error("bar #{index} ({date}): {violation}")]
pub struct ValidationError {
    pub index: usize,
    pub date: NaiveDate,
    pub violation: BarViolation,
}

/// Check a single bar against the OHLCV invariants.
///
/// Order of checks: finiteness, positive prices, non-negative volume, then the
/// `low <= open, close <= high` ordering. Only the first failure is reported.
pub fn validate_bar(bar: &DailyBar) -> Result<(), BarViolation> {
    let fields = [
        (BarField::Open, bar.open),
        (BarField::High, bar.high),
        (BarField::Low, bar.low),
        (BarField::Close, bar.close),
        (BarField::Volume, bar.volume),
    ];

    if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(BarViolation::NonFinite { field: *field });
    }

    if let Some((field, value)) = fields[..4].iter().find(|(_, v)| *v <= 0.0) {
        return Err(BarViolation::NonPositivePrice {
            field: *field,
            value: *value,
        });
    }

    if bar.volume < 0.0 {
        return Err(BarViolation::NegativeVolume { volume: bar.volume });
    }

    if bar.high < bar.low {
        return Err(BarViolation::HighBelowLow {
            high: bar.high,
            low: bar.low,
        });
    }

    if bar.open < bar.low || bar.open > bar.high {
        return Err(BarViolation::OpenOutsideRange {
            open: bar.open,
            low: bar.low,
            high: bar.high,
        });
    }

    if bar.close < bar.low || bar.close > bar.high {
        return Err(BarViolation::CloseOutsideRange {
            close: bar.close,
            low: bar.low,
            high: bar.high,
        });
    }

    Ok(())
}
