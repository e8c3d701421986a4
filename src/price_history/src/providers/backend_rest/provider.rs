use async_trait::async_trait;
use reqwest::{Client, header};
use secrecy::ExposeSecret;
use snafu::{ResultExt, ensure};
use tracing::{debug, info};

use crate::{
    config::ClientConfig,
    models::{daily_series::DailySeries, price_row::DailyPricesBody},
    normalize::normalize_rows,
    providers::{
        ApiSnafu, ClientBuildSnafu, DecodeSnafu, InvalidBaseUrlSnafu, InvalidTokenSnafu,
        PriceHistoryProvider, ProviderError, ProviderInitError, RequestSnafu,
    },
};

use super::response::error_message;

pub struct BackendRestProvider {
    client: Client,
    base_url: String,
}

impl BackendRestProvider {
    /// Creates a provider for the backend described by `config`.
    ///
    /// The token, if any, is attached to every request as a bearer header.
    pub fn new(config: &ClientConfig) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value =
                header::HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .context(InvalidTokenSnafu)?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context(ClientBuildSnafu)?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        client
            .get(&base_url)
            .build()
            .context(InvalidBaseUrlSnafu {
                url: config.base_url.clone(),
            })?;

        Ok(Self { client, base_url })
    }

    fn daily_url(&self, stock_item_id: u64) -> String {
        format!("{}/api/stock/{}", self.base_url, stock_item_id)
    }
}

#[async_trait]
impl PriceHistoryProvider for BackendRestProvider {
    async fn fetch_daily(&self, stock_item_id: u64) -> Result<DailySeries, ProviderError> {
        let url = self.daily_url(stock_item_id);
        debug!(%url, "requesting daily prices");

        let response = self.client.get(&url).send().await.context(RequestSnafu)?;
        let status = response.status();
        let body = response.bytes().await.context(RequestSnafu)?;

        ensure!(
            status.is_success(),
            ApiSnafu {
                status: status.as_u16(),
                message: error_message(status, &body),
            }
        );

        let rows = serde_json::from_slice::<DailyPricesBody>(&body)
            .context(DecodeSnafu)?
            .into_rows();
        let stock_name = rows.iter().find_map(|r| r.stock_name.clone());
        let (bars, skipped) = normalize_rows(&rows);

        info!(
            stock_item_id,
            rows = rows.len(),
            bars = bars.len(),
            skipped = skipped.len(),
            "fetched daily prices"
        );

        Ok(DailySeries {
            stock_item_id,
            stock_name,
            bars,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_url_ignores_trailing_slash() {
        let provider = BackendRestProvider::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(provider.daily_url(42), "http://localhost:8080/api/stock/42");
    }

    #[test]
    fn rejects_unusable_base_url_and_token() {
        assert!(matches!(
            BackendRestProvider::new(&ClientConfig::new("not a url")),
            Err(ProviderInitError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BackendRestProvider::new(&ClientConfig::default().with_token("bad\ntoken")),
            Err(ProviderInitError::InvalidToken { .. })
        ));
    }
}
