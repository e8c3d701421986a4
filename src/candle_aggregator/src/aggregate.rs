//! Daily-bar re-aggregation into weekly and monthly candles.
//!
//! The pipeline for one call:
//! 1. validate every bar and resolve its bucket key ([`crate::bucket`])
//! 2. apply the [`InvalidBarPolicy`] to the rejects
//! 3. group accepted bars by bucket key, sort each bucket by date
//! 4. reduce each bucket to an [`AggregatedBar`], ascending by key
//!
//! The full result is always computed; the display window only trims what
//! [`Aggregation::display`] hands to a chart.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    bucket::bucket_key,
    config::{AggregatorConfig, DisplayWindows, InvalidBarPolicy},
    errors::{AggregateError, AggregateWarning},
    models::{aggregated_bar::AggregatedBar, daily_bar::DailyBar, period::Period},
    validate::{BarViolation, ValidationError, validate_bar},
};

/// Summary of one aggregation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationReport {
    pub period: Period,
    pub policy: InvalidBarPolicy,
    /// Bars supplied by the caller.
    pub input_bars: usize,
    /// Bars that made it into a bucket.
    pub accepted_bars: usize,
    /// Buckets in the full (untruncated) result.
    pub buckets: usize,
    /// Rejected bars in input order.
    pub rejected: Vec<ValidationError>,
    pub warnings: Vec<AggregateWarning>,
}

/// Result of [`Aggregator::aggregate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    bars: Vec<AggregatedBar>,
    report: AggregationReport,
    windows: DisplayWindows,
}

impl Aggregation {
    /// Every bucket, ascending by key.
    pub fn bars(&self) -> &[AggregatedBar] {
        &self.bars
    }

    /// The most recent buckets that fit the display window of the period.
    pub fn display(&self) -> &[AggregatedBar] {
        trailing_window(&self.bars, self.windows.limit(self.report.period))
    }

    pub fn report(&self) -> &AggregationReport {
        &self.report
    }

    pub fn into_display(mut self) -> Vec<AggregatedBar> {
        let limit = self.windows.limit(self.report.period);
        let skip = self.bars.len().saturating_sub(limit);
        self.bars.drain(..skip);
        self.bars
    }

    pub fn into_parts(self) -> (Vec<AggregatedBar>, AggregationReport) {
        (self.bars, self.report)
    }
}

/// Stateless aggregator bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate `bars` into `period` buckets.
    ///
    /// Input order does not matter. Invalid bars are handled per the
    /// configured policy: `Abort` returns the first one (in input order) as
    /// an error, `Drop` leaves them out and lists them in the report.
    pub fn aggregate(
        &self,
        bars: &[DailyBar],
        period: Period,
    ) -> Result<Aggregation, AggregateError> {
        let policy = self.config.policy;
        let (accepted, rejected) = screen(bars, period);

        if policy == InvalidBarPolicy::Abort {
            if let Some(first) = rejected.first() {
                warn!(%period, error = %first, rejected = rejected.len(), "aborting aggregation");
                return Err(AggregateError::InvalidBar(first.clone()));
            }
        }
        for err in &rejected {
            warn!(%period, error = %err, "dropping invalid bar");
        }

        let mut buckets: BTreeMap<NaiveDate, Vec<DailyBar>> = BTreeMap::new();
        for (key, bar) in &accepted {
            buckets.entry(*key).or_default().push(*bar);
        }

        let out: Vec<AggregatedBar> = buckets
            .into_iter()
            .filter_map(|(key, mut members)| {
                members.sort_by_key(|bar| bar.date);
                AggregatedBar::from_sorted(key, &members)
            })
            .collect();

        let mut warnings = Vec::new();
        if bars.is_empty() {
            debug!(%period, "no bars supplied");
            warnings.push(AggregateWarning::EmptyInput);
        } else if accepted.is_empty() {
            warnings.push(AggregateWarning::AllBarsRejected);
        }

        let report = AggregationReport {
            period,
            policy,
            input_bars: bars.len(),
            accepted_bars: accepted.len(),
            buckets: out.len(),
            rejected,
            warnings,
        };
        debug!(
            %period,
            input = report.input_bars,
            accepted = report.accepted_bars,
            buckets = report.buckets,
            "aggregated daily bars"
        );

        Ok(Aggregation {
            bars: out,
            report,
            windows: self.config.windows,
        })
    }
}

/// Aggregate with the default configuration and return the display window.
///
/// This is the chart-facing entrypoint: invalid bars abort the call and at
/// most 60 daily, 52 weekly or 24 monthly buckets come back.
pub fn aggregate(bars: &[DailyBar], period: Period) -> Result<Vec<AggregatedBar>, AggregateError> {
    Ok(Aggregator::default().aggregate(bars, period)?.into_display())
}

/// Aggregate with the default configuration and return every bucket.
pub fn aggregate_all(
    bars: &[DailyBar],
    period: Period,
) -> Result<Vec<AggregatedBar>, AggregateError> {
    Ok(Aggregator::default().aggregate(bars, period)?.into_parts().0)
}

/// The last `limit` bars of an ascending series.
pub fn trailing_window(bars: &[AggregatedBar], limit: usize) -> &[AggregatedBar] {
    &bars[bars.len().saturating_sub(limit)..]
}

/// Split input into bucketed bars and rejects, both in input order.
fn screen(bars: &[DailyBar], period: Period) -> (Vec<(NaiveDate, DailyBar)>, Vec<ValidationError>) {
    let mut seen: HashMap<NaiveDate, usize> = HashMap::with_capacity(bars.len());
    for bar in bars {
        *seen.entry(bar.date).or_default() += 1;
    }

    let mut accepted = Vec::with_capacity(bars.len());
    let mut rejected = Vec::new();

    for (index, bar) in bars.iter().enumerate() {
        let outcome = validate_bar(bar).and_then(|()| {
            if seen.get(&bar.date).copied().unwrap_or(0) > 1 {
                return Err(BarViolation::DuplicateDate);
            }
            bucket_key(bar.date, period).ok_or(BarViolation::DateOutOfRange)
        });
        match outcome {
            Ok(key) => accepted.push((key, *bar)),
            Err(violation) => rejected.push(ValidationError {
                index,
                date: bar.date,
                violation,
            }),
        }
    }

    (accepted, rejected)
}
