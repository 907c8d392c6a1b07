//! Account domain: a trader's balance and the funds workflow.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::domain::trader::Trader;
use crate::shared::TraderId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{AccountState, FundsAction, FundsDraft};

/// Balance as last reported by the backend. Never adjusted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub trader_id: TraderId,
    pub amount: Decimal,
}

/// `GET <traderAccountUrl>{id}` payload: profile plus balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraderAccount {
    pub trader: Trader,
    pub account: Account,
}
