//! Unified dashboard error types.

use thiserror::Error;

use crate::shared::AmountError;

/// Top-level dashboard error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport.
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Operator input rejected before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    Amount(#[from] AmountError),

    #[error("{0}")]
    Draft(#[from] DraftError),

    #[error("Invalid trader id '{0}'")]
    TraderId(String),
}

/// Add-trader form problems, reported per field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("'{0}' is not a valid date of birth (expected YYYY-MM-DD)")]
    InvalidDob(String),
}

/// Backend payload that could not be turned into a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Account amount for trader {trader_id} is out of range")]
    AmountOutOfRange { trader_id: i64 },

    #[error("{field} of quote {ticker} is out of range")]
    QuoteFieldOutOfRange { ticker: String, field: &'static str },

    #[error("Date of birth timestamp {0} is out of range")]
    DobOutOfRange(i64),
}

/// Configuration problems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("API base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// Navigation paths the shell cannot map to a view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No view for path '{0}'")]
    NotFound(String),

    #[error("Invalid trader id '{0}' in path")]
    InvalidTraderId(String),

    #[error("Too many redirects starting at '{0}'")]
    RedirectLoop(String),
}

impl DashboardError {
    /// Short operator-facing text for notices.
    pub fn notice_text(&self) -> String {
        match self {
            DashboardError::Http(HttpError::NotFound(_)) => "Not found".to_string(),
            DashboardError::Http(HttpError::Timeout) => {
                "The server did not respond in time".to_string()
            }
            DashboardError::Http(HttpError::BadRequest(body)) if !body.trim().is_empty() => {
                format!("Rejected by server: {}", body.trim())
            }
            other => other.to_string(),
        }
    }
}
