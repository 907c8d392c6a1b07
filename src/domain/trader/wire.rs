//! Wire types for trader responses.

use serde::{Deserialize, Serialize};

/// REST representation of a trader (`GET <tradersUrl>` items, and the
/// `trader` field of the account view).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TraderResponse {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub dob: Option<DobWire>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Date of birth as the backend may send it: a preformatted string, or a
/// `java.util.Date` serialized as epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DobWire {
    Text(String),
    EpochMillis(i64),
}
