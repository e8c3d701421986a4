use std::time::Duration;

use price_history::{
    ClientConfig,
    config::{BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_ENV, TOKEN_ENV},
};
use secrecy::ExposeSecret;
use serial_test::serial;
use shared_utils::env::EnvError;

fn clear() {
    for name in [BASE_URL_ENV, TOKEN_ENV, TIMEOUT_ENV] {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe { std::env::remove_var(name) }
    }
}

fn set(name: &str, value: &str) {
    // SAFETY: env-mutating tests are serialized with #[serial]
    unsafe { std::env::set_var(name, value) }
}

#[test]
#[serial]
fn unset_environment_gives_defaults() {
    clear();
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(config.token.is_none());
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    clear();
    set(BASE_URL_ENV, "https://stocks.example.com");
    set(TOKEN_ENV, "abc123");
    set(TIMEOUT_ENV, "30");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://stocks.example.com");
    assert_eq!(
        config.token.as_ref().map(|t| t.expose_secret()),
        Some("abc123")
    );
    assert_eq!(config.timeout, Duration::from_secs(30));
    clear();
}

#[test]
#[serial]
fn blank_token_counts_as_unset() {
    clear();
    set(TOKEN_ENV, "   ");
    assert!(ClientConfig::from_env().unwrap().token.is_none());
    clear();
}

#[test]
#[serial]
fn bad_timeout_is_reported() {
    clear();
    set(TIMEOUT_ENV, "ten");
    let err = ClientConfig::from_env().unwrap_err();
    assert!(matches!(err, EnvError::Invalid { ref name, .. } if name == TIMEOUT_ENV));
    clear();
}
