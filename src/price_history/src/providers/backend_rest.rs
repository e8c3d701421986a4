//! Provider for the stock backend's REST API (`GET /api/stock/{id}`).

mod provider;
mod response;

pub use provider::BackendRestProvider;
