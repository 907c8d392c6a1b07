//! Wire types for the trader account view.

use crate::domain::trader::wire::TraderResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub trader_id: Option<i64>,
    pub amount: f64,
}

/// REST response for `GET <traderAccountUrl>{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraderAccountResponse {
    pub trader: TraderResponse,
    pub account: AccountResponse,
}
