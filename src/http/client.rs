//! Low-level HTTP client: `DashboardHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Writes return `()`: their bodies are never
//! used, the views re-fetch instead.

use crate::config::Endpoints;
use crate::domain::account::wire::TraderAccountResponse;
use crate::domain::quote::wire::QuoteResponse;
use crate::domain::trader::wire::TraderResponse;
use crate::domain::trader::NewTrader;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::http::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::shared::{FundsAmount, TraderId};

use futures_util::future::{select, Either};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use urlencoding::encode;

/// Low-level HTTP client for the trading REST API.
#[derive(Clone)]
pub struct DashboardHttp {
    base_url: String,
    endpoints: Endpoints,
    transport: Arc<dyn Transport>,
    timeout: Duration,
    read_retry: RetryPolicy,
}

impl DashboardHttp {
    pub fn new(
        base_url: &str,
        endpoints: Endpoints,
        transport: Arc<dyn Transport>,
        timeout: Duration,
        read_retry: RetryPolicy,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
            transport,
            timeout,
            read_retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Traders ──────────────────────────────────────────────────────────

    pub async fn get_traders(&self) -> Result<Vec<TraderResponse>, HttpError> {
        let url = self.url(&self.endpoints.traders);
        self.get(&url).await
    }

    pub async fn create_trader(&self, trader: &NewTrader) -> Result<(), HttpError> {
        let url = format!(
            "{}/firstname/{}/lastname/{}/dob/{}/country/{}/email/{}",
            self.url(&self.endpoints.create_trader),
            encode(&trader.first_name),
            encode(&trader.last_name),
            trader.dob.format("%Y-%m-%d"),
            encode(&trader.country),
            encode(&trader.email),
        );
        let request = HttpRequest::new(Method::Post, url).with_body(serde_json::json!({}));
        self.write(request).await
    }

    pub async fn delete_trader(&self, trader_id: TraderId) -> Result<(), HttpError> {
        let url = format!("{}/{}", self.url(&self.endpoints.delete_trader), trader_id);
        self.write(HttpRequest::new(Method::Delete, url)).await
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub async fn get_trader_account(
        &self,
        trader_id: TraderId,
    ) -> Result<TraderAccountResponse, HttpError> {
        let url = format!("{}{}", self.url(&self.endpoints.trader_account), trader_id);
        self.get(&url).await
    }

    pub async fn deposit_funds(
        &self,
        trader_id: TraderId,
        amount: &FundsAmount,
    ) -> Result<(), HttpError> {
        let url = format!(
            "{}{}/amount/{}",
            self.url(&self.endpoints.deposit_funds),
            trader_id,
            amount.to_path_segment()
        );
        self.write(HttpRequest::new(Method::Put, url)).await
    }

    pub async fn withdraw_funds(
        &self,
        trader_id: TraderId,
        amount: &FundsAmount,
    ) -> Result<(), HttpError> {
        let url = format!(
            "{}{}/amount/{}",
            self.url(&self.endpoints.withdraw_funds),
            trader_id,
            amount.to_path_segment()
        );
        self.write(HttpRequest::new(Method::Put, url)).await
    }

    // ── Quotes ───────────────────────────────────────────────────────────

    pub async fn get_daily_list_quotes(&self) -> Result<Vec<QuoteResponse>, HttpError> {
        let url = self.url(&self.endpoints.daily_list_quotes);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let request = HttpRequest::new(Method::Get, url);
        let resp = self.request_with_retry(&request, &self.read_retry).await?;
        serde_json::from_str(&resp.body).map_err(|e| HttpError::Decode(e.to_string()))
    }

    async fn write(&self, request: HttpRequest) -> Result<(), HttpError> {
        self.request_with_retry(&request, &RetryPolicy::None)
            .await
            .map(|_| ())
    }

    async fn request_with_retry(
        &self,
        request: &HttpRequest,
        retry: &RetryPolicy,
    ) -> Result<HttpResponse, HttpError> {
        let Some(config) = retry.config() else {
            return self.do_request(request).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(request).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout | HttpError::Transport(_) => true,
                        #[cfg(feature = "http")]
                        HttpError::Reqwest(re) => re.is_connect() || re.is_timeout() || re.is_request(),
                        _ => false,
                    };

                    if !should_retry {
                        return Err(e);
                    }
                    if attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Retrying {} {}",
                            request.method,
                            request.url
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    /// One attempt, bounded by the configured timeout, with status mapping.
    async fn do_request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let send = self.transport.send(request);
        let deadline = futures_timer::Delay::new(self.timeout);
        let resp = match select(send, deadline).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => {
                tracing::warn!(
                    method = %request.method,
                    url = %request.url,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Request timed out"
                );
                return Err(HttpError::Timeout);
            }
        };

        if resp.is_success() {
            return Ok(resp);
        }

        match resp.status {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(resp.body)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: resp.retry_after_ms,
            }),
            400..=499 => Err(HttpError::BadRequest(resp.body)),
            status => Err(HttpError::ServerError {
                status,
                body: resp.body,
            }),
        }
    }
}
