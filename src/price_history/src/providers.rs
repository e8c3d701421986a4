//! Provider abstraction for daily price history.
//!
//! [`PriceHistoryProvider`] is the seam between the aggregator and wherever
//! daily rows come from. Implementations own all I/O and hand back bars that
//! already went through [`crate::normalize`].
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use price_history::models::daily_series::DailySeries;
//! use price_history::providers::{PriceHistoryProvider, ProviderError};
//!
//! struct Fixed;
//!
//! #[async_trait]
//! impl PriceHistoryProvider for Fixed {
//!     async fn fetch_daily(&self, stock_item_id: u64) -> Result<DailySeries, ProviderError> {
//!         Ok(DailySeries {
//!             stock_item_id,
//!             stock_name: None,
//!             bars: vec![],
//!             skipped: vec![],
//!         })
//!     }
//! }
//! ```

pub mod backend_rest;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::daily_series::DailySeries;

/// Source of daily bars for one instrument.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetches every daily row the source has for `stock_item_id`.
    ///
    /// Rows that cannot be normalized are reported in
    /// [`DailySeries::skipped`] rather than failing the call.
    async fn fetch_daily(&self, stock_item_id: u64) -> Result<DailySeries, ProviderError>;
}

/// Errors that can occur while building a provider.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// Token contains characters not allowed in a header.
    #[snafu(display("Invalid API token format: {source}"))]
    InvalidToken {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid base URL {url:?}: {source}"))]
    InvalidBaseUrl {
        url: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `PriceHistoryProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// Network failure, timeout, or an unreadable response body.
    #[snafu(display("API request failed: {source}"))]
    Request {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The backend answered with a non-success status.
    #[snafu(display("API error ({status}): {message}"))]
    Api {
        status: u16,
        message: String,
        backtrace: Backtrace,
    },

    /// The body is not the expected JSON shape.
    #[snafu(display("Failed to decode response: {source}"))]
    Decode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}

impl From<ProviderInitError> for ProviderError {
    fn from(source: ProviderInitError) -> Self {
        ProviderError::Init { source }
    }
}
