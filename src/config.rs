//! Dashboard configuration: API base URL, endpoint table, timeout, retries.
//!
//! Values come from [`DashboardConfig::default`] or the environment
//! ([`DashboardConfig::from_env`]). The binary loads `.env` first and lets
//! command-line flags override what the environment says.

use std::time::Duration;

use crate::error::ConfigError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network;

/// Endpoint paths, relative to the API base URL.
///
/// Prefixes that the trader id is appended to directly (`trader_account`,
/// `deposit_funds`, `withdraw_funds`) keep their trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub traders: String,
    pub create_trader: String,
    pub delete_trader: String,
    pub trader_account: String,
    pub deposit_funds: String,
    pub withdraw_funds: String,
    pub daily_list_quotes: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            traders: network::TRADERS_PATH.to_string(),
            create_trader: network::CREATE_TRADER_PATH.to_string(),
            delete_trader: network::DELETE_TRADER_PATH.to_string(),
            trader_account: network::TRADER_ACCOUNT_PATH.to_string(),
            deposit_funds: network::DEPOSIT_FUNDS_PATH.to_string(),
            withdraw_funds: network::WITHDRAW_FUNDS_PATH.to_string(),
            daily_list_quotes: network::DAILY_LIST_QUOTES_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
    pub endpoints: Endpoints,
    pub timeout: Duration,
    /// Applied to idempotent GETs. Writes are never retried.
    pub read_retry: RetryPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: network::DEFAULT_API_URL.to_string(),
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(network::DEFAULT_TIMEOUT_SECS),
            read_retry: RetryPolicy::Idempotent,
        }
    }
}

impl DashboardConfig {
    /// Read overrides from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys keep their defaults.
    ///
    /// | key                         | meaning                                |
    /// |-----------------------------|----------------------------------------|
    /// | `TRADING_API_URL`           | base URL                               |
    /// | `TRADING_API_TIMEOUT_SECS`  | per-request timeout                    |
    /// | `TRADING_API_READ_RETRIES`  | max GET retries, `0` disables retrying |
    /// | `TRADING_*_PATH`            | endpoint path overrides                |
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("TRADING_API_URL") {
            config.api_url = url;
        }
        if let Some(raw) = lookup("TRADING_API_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "TRADING_API_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("TRADING_API_READ_RETRIES") {
            let retries = raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: "TRADING_API_READ_RETRIES",
                value: raw.clone(),
            })?;
            config.read_retry = if retries == 0 {
                RetryPolicy::None
            } else {
                RetryPolicy::Custom(RetryConfig {
                    max_retries: retries,
                    ..RetryConfig::idempotent()
                })
            };
        }

        let endpoints = &mut config.endpoints;
        let overrides: [(&str, &mut String); 7] = [
            ("TRADING_TRADERS_PATH", &mut endpoints.traders),
            ("TRADING_CREATE_TRADER_PATH", &mut endpoints.create_trader),
            ("TRADING_DELETE_TRADER_PATH", &mut endpoints.delete_trader),
            ("TRADING_TRADER_ACCOUNT_PATH", &mut endpoints.trader_account),
            ("TRADING_DEPOSIT_FUNDS_PATH", &mut endpoints.deposit_funds),
            ("TRADING_WITHDRAW_FUNDS_PATH", &mut endpoints.withdraw_funds),
            ("TRADING_DAILY_LIST_QUOTES_PATH", &mut endpoints.daily_list_quotes),
        ];
        for (key, slot) in overrides {
            if let Some(path) = lookup(key) {
                *slot = path;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.api_url.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_url, network::DEFAULT_API_URL);
        assert_eq!(config.endpoints, Endpoints::default());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(matches!(config.read_retry, RetryPolicy::Idempotent));
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("TRADING_API_URL", "https://trading.example.com"),
            ("TRADING_API_TIMEOUT_SECS", "5"),
            ("TRADING_API_READ_RETRIES", "0"),
            ("TRADING_TRADERS_PATH", "/api/traders"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://trading.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(matches!(config.read_retry, RetryPolicy::None));
        assert_eq!(config.endpoints.traders, "/api/traders");
        assert_eq!(config.endpoints.delete_trader, network::DELETE_TRADER_PATH);
    }

    #[test]
    fn test_custom_retry_count() {
        let config =
            DashboardConfig::from_lookup(lookup_from(&[("TRADING_API_READ_RETRIES", "5")]))
                .unwrap();
        match config.read_retry {
            RetryPolicy::Custom(c) => assert_eq!(c.max_retries, 5),
            other => panic!("unexpected policy {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            DashboardConfig::from_lookup(lookup_from(&[("TRADING_API_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            DashboardConfig::from_lookup(lookup_from(&[("TRADING_API_READ_RETRIES", "many")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            DashboardConfig::from_lookup(lookup_from(&[("TRADING_API_URL", "localhost:8080")])),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}
