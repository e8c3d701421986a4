//! Fetch boundary for daily stock prices.
//!
//! Rows from the backend's `GET /api/stock/{id}` endpoint are decoded into
//! [`StockPriceDailyRow`](models::price_row::StockPriceDailyRow), normalized
//! once into [`candle_aggregator::DailyBar`] and handed to the aggregator.

pub mod config;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod providers;

pub use config::ClientConfig;
pub use models::{daily_series::DailySeries, price_row::StockPriceDailyRow};
pub use normalize::{NormalizeError, NormalizeErrorKind, normalize_row, normalize_rows};
pub use providers::{
    PriceHistoryProvider, ProviderError, ProviderInitError, backend_rest::BackendRestProvider,
};
