//! The single normalization step between the wire rows and [`DailyBar`].
//!
//! Field resolution: the backend spelling wins (`tradeDate`, `openPrice`,
//! `highPrice`, `lowPrice`, `closePrice`), the frontend alias (`date`,
//! `open`, ...) is the fallback. A row missing a field, or carrying a value
//! that does not parse, is reported as a [`NormalizeError`] and skipped.
//!
//! OHLC consistency is not checked here; the aggregator validates bars.

use candle_aggregator::DailyBar;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::models::price_row::{Numeric, StockPriceDailyRow};

/// Why a row could not be normalized.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizeErrorKind {
    #[error("missing field {field}")]
    MissingField { field: &'static str },

    #[error("field {field} is not a number: {value:?}")]
    BadNumber { field: &'static str, value: String },

    #[error("field {field} is not a date: {value:?}")]
    BadDate { field: &'static str, value: String },
}

/// A skipped row and its position in the response.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[error("row {row}: {kind}")]
pub struct NormalizeError {
    pub row: usize,
    pub kind: NormalizeErrorKind,
}

/// Normalize one row. `row` is only used to label errors.
pub fn normalize_row(row: usize, raw: &StockPriceDailyRow) -> Result<DailyBar, NormalizeError> {
    let err = |kind| NormalizeError { row, kind };

    let date = resolve_date(raw).map_err(err)?;
    let open = resolve_number("openPrice", &raw.open_price, &raw.open).map_err(err)?;
    let high = resolve_number("highPrice", &raw.high_price, &raw.high).map_err(err)?;
    let low = resolve_number("lowPrice", &raw.low_price, &raw.low).map_err(err)?;
    let close = resolve_number("closePrice", &raw.close_price, &raw.close).map_err(err)?;
    let volume = resolve_number("volume", &raw.volume, &None).map_err(err)?;

    Ok(DailyBar::new(date, open, high, low, close, volume))
}

/// Normalize every row, keeping the good ones and reporting the rest.
///
/// Bars keep the response order.
pub fn normalize_rows(rows: &[StockPriceDailyRow]) -> (Vec<DailyBar>, Vec<NormalizeError>) {
    let mut bars = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();
    for (i, raw) in rows.iter().enumerate() {
        match normalize_row(i, raw) {
            Ok(bar) => bars.push(bar),
            Err(e) => {
                warn!(error = %e, "skipping price row");
                skipped.push(e);
            }
        }
    }
    (bars, skipped)
}

fn resolve_date(raw: &StockPriceDailyRow) -> Result<NaiveDate, NormalizeErrorKind> {
    let (field, value) = match (&raw.trade_date, &raw.date) {
        (Some(v), _) => ("tradeDate", v),
        (None, Some(v)) => ("date", v),
        (None, None) => return Err(NormalizeErrorKind::MissingField { field: "tradeDate" }),
    };
    parse_trade_date(value).ok_or_else(|| NormalizeErrorKind::BadDate {
        field,
        value: value.clone(),
    })
}

/// `YYYY-MM-DD`, or a timestamp whose calendar date is taken as-is.
fn parse_trade_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn resolve_number(
    field: &'static str,
    primary: &Option<Numeric>,
    alias: &Option<Numeric>,
) -> Result<f64, NormalizeErrorKind> {
    let value = primary
        .as_ref()
        .or(alias.as_ref())
        .ok_or(NormalizeErrorKind::MissingField { field })?;
    value.to_f64().ok_or_else(|| NormalizeErrorKind::BadNumber {
        field,
        value: value.raw(),
    })
}
