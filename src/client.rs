//! High-level client: `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::{DashboardConfig, Endpoints};
use crate::domain::account::client::Accounts;
use crate::domain::quote::client::Quotes;
use crate::domain::trader::client::Traders;
use crate::error::DashboardError;
use crate::http::retry::RetryPolicy;
use crate::http::transport::Transport;
use crate::http::DashboardHttp;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::trader::client::Traders as TradersClient;

/// Entry point for talking to the trading API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        DashboardClientBuilder::from_config(config).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn traders(&self) -> Traders<'_> {
        Traders { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    config: DashboardConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            config: DashboardConfig::default(),
            transport: None,
        }
    }
}

impl DashboardClientBuilder {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            config: config.clone(),
            transport: None,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.api_url = url.to_string();
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn read_retry(mut self, policy: RetryPolicy) -> Self {
        self.config.read_retry = policy;
        self
    }

    /// Replace the default reqwest transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<DashboardClient, DashboardError> {
        self.config.validate()?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.config.timeout)?,
        };
        Ok(DashboardClient {
            http: DashboardHttp::new(
                &self.config.api_url,
                self.config.endpoints,
                transport,
                self.config.timeout,
                self.config.read_retry,
            ),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, DashboardError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, DashboardError> {
    Err(DashboardError::Other(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::{MockTransport, Reply};
    use crate::http::Method;
    use crate::shared::TraderId;
    use serde_json::json;

    fn client(mock: &MockTransport) -> DashboardClient {
        DashboardClient::builder()
            .base_url("http://mock")
            .read_retry(RetryPolicy::None)
            .transport(mock.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = DashboardClient::builder()
            .base_url("ftp://nope")
            .transport(MockTransport::new())
            .build();
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[tokio::test]
    async fn test_accounts_get_converts() {
        let mock = MockTransport::new();
        mock.reply(
            Method::Get,
            "http://mock/dashboard/profile/traderId/42",
            Reply::json(
                200,
                json!({"trader": {"id": 42, "firstName": "Ada", "lastName": "Lovelace",
                                  "dob": "1815-12-10", "country": "UK", "email": "ada@test.com"},
                       "account": {"id": 1, "traderId": 42, "amount": 100}}),
            ),
        );
        let view = client(&mock).accounts().get(TraderId::new(42)).await.unwrap();
        assert_eq!(view.trader.full_name(), "Ada Lovelace");
        assert_eq!(view.account.amount, rust_decimal::Decimal::from(100));
    }

    #[tokio::test]
    async fn test_not_found_surfaces_as_http_error() {
        let mock = MockTransport::new();
        let err = client(&mock).accounts().get(TraderId::new(7)).await.unwrap_err();
        assert!(matches!(err, DashboardError::Http(crate::error::HttpError::NotFound(_))));
        assert_eq!(err.notice_text(), "Not found");
    }

    #[tokio::test]
    async fn test_quotes_daily_list() {
        let mock = MockTransport::new();
        mock.reply(
            Method::Get,
            "http://mock/quote/dailyList",
            Reply::json(200, json!([{"ticker": "MSFT", "lastPrice": 410.5, "bidPrice": 410.25,
                                     "bidSize": 10, "askPrice": 410.75, "askSize": 12}])),
        );
        let quotes = client(&mock).quotes().daily_list().await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].ticker, "MSFT");
    }
}
