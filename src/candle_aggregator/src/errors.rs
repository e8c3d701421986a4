use serde::Serialize;
use thiserror::Error;

use crate::validate::ValidationError;

/// Failure of an aggregation call.
///
/// Only raised under [`InvalidBarPolicy::Abort`](crate::config::InvalidBarPolicy::Abort);
/// with `Drop` the same information lands in the report instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AggregateError {
    /// The first invalid bar in input order.
    #[error("aggregation aborted, {0}")]
    InvalidBar(#[from] ValidationError),
}

/// Non-fatal conditions worth showing to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregateWarning {
    /// No bars were supplied; the output is empty.
    EmptyInput,
    /// Bars were supplied but every one of them was dropped.
    AllBarsRejected,
}
