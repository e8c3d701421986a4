//! Re-aggregation of daily OHLCV bars into weekly and monthly candles.
//!
//! ```
//! use candle_aggregator::{DailyBar, Period, aggregate};
//! use chrono::NaiveDate;
//!
//! let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let bars = vec![
//!     DailyBar::new(monday, 10.0, 10.6, 9.8, 10.5, 100.0),
//!     DailyBar::new(monday.succ_opt().unwrap(), 11.0, 11.6, 10.9, 11.5, 200.0),
//! ];
//! let weeks = aggregate(&bars, Period::Weekly).unwrap();
//! assert_eq!(weeks.len(), 1);
//! assert_eq!(weeks[0].volume, 300.0);
//! ```

pub mod aggregate;
pub mod bucket;
pub mod config;
pub mod errors;
pub mod models;
pub mod validate;

pub use aggregate::{Aggregation, AggregationReport, Aggregator, aggregate, aggregate_all};
pub use config::{AggregatorConfig, DisplayWindows, InvalidBarPolicy};
pub use errors::{AggregateError, AggregateWarning};
pub use models::{aggregated_bar::AggregatedBar, daily_bar::DailyBar, period::Period};
pub use validate::{BarField, BarViolation, ValidationError};
