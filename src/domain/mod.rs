//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types the views display
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `state.rs`: View state containers with transition methods
//! - `client.rs`: Sub-client with HTTP methods

pub mod account;
pub mod quote;
pub mod trader;
