//! Trader domain: trader profiles and the add-trader form.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::TraderId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use state::{DirectoryState, TraderDraft, TraderField};

/// A trader profile as displayed. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trader {
    pub id: TraderId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Shown verbatim; see [`wire::DobWire`].
    pub dob: String,
    pub country: String,
}

impl Trader {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A validated add-trader submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrader {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub dob: NaiveDate,
}
