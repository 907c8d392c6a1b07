//! Wire types for quote responses.

use serde::{Deserialize, Serialize};

/// REST representation of one quote in the daily list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub ticker: String,
    #[serde(default)]
    pub last_price: f64,
    #[serde(default)]
    pub bid_price: f64,
    #[serde(default)]
    pub bid_size: i64,
    #[serde(default)]
    pub ask_price: f64,
    #[serde(default)]
    pub ask_size: i64,
}
