use std::time::Duration;

use secrecy::SecretString;
use shared_utils::env::{EnvError, get_env_parsed, get_env_var_opt, get_env_var_or};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_ENV: &str = "CANDLES_API_BASE_URL";
pub const TOKEN_ENV: &str = "CANDLES_API_TOKEN";
pub const TIMEOUT_ENV: &str = "CANDLES_API_TIMEOUT_SECS";

/// Connection settings for the price-history backend.
///
/// Built explicitly, or once from the environment with [`ClientConfig::from_env`];
/// providers never read ambient state themselves.
#[derive(Debug)]
pub struct ClientConfig {
    /// Scheme, host and optional port, without the `/api/...` path.
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub token: Option<SecretString>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `CANDLES_API_BASE_URL`, `CANDLES_API_TOKEN` and
    /// `CANDLES_API_TIMEOUT_SECS`. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, EnvError> {
        let base_url = get_env_var_or(BASE_URL_ENV, DEFAULT_BASE_URL);
        let token = get_env_var_opt(TOKEN_ENV).map(SecretString::from);
        let timeout_secs: u64 = get_env_parsed(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
