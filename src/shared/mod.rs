//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types.

pub mod amount;
pub mod load;
pub mod modal;
pub mod notice;

pub use amount::{AmountError, FundsAmount};
pub use load::{FetchTicket, LoadState, Loadable};
pub use modal::{Modal, SubmitBlocked};
pub use notice::{Notice, NoticeId, NoticeLevel, Notices};

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── TraderId ────────────────────────────────────────────────────────────────

/// Backend-assigned trader identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraderId(i64);

impl TraderId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TraderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TraderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Parses the `:traderId` path segment. Empty, non-numeric and negative
/// values are rejected.
impl FromStr for TraderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(id) if id >= 0 => Ok(TraderId(id)),
            _ => Err(ValidationError::TraderId(s.to_string())),
        }
    }
}

impl Serialize for TraderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for TraderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Ok(TraderId(id))
    }
}
