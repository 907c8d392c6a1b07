//! # Trading Dashboard
//!
//! Administration dashboard for a trading backend: a trader directory, a
//! per-trader account view with deposit/withdraw, and a daily quotes list.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: shared newtypes, domain models and their wire types, view state
//! 2. **HTTP API**: `DashboardHttp` over a pluggable `Transport`, with retries for reads
//! 3. **High-Level Client**: `DashboardClient` with nested sub-clients
//! 4. **Views**: navigation shell and view controllers that drive state through the client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trading_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let view = TraderAccountView::new(client, TraderId::new(42));
//! view.load().await;
//! view.open_deposit().await;
//! view.set_pending_amount(FundsAction::Deposit, "50").await;
//! view.confirm_deposit().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and view-state building blocks.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified dashboard error types.
pub mod error;

/// Default backend URL and endpoint paths.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient`, the primary entry point.
pub mod client;

// ── Layer 4: Views ───────────────────────────────────────────────────────────

/// Navigation shell: path to view resolution.
pub mod router;

/// View controllers.
pub mod view;

/// Text rendering of view state.
pub mod render;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{
        FundsAmount, LoadState, Modal, Notice, NoticeId, NoticeLevel, Notices, SubmitBlocked,
        TraderId,
    };

    // Domain types
    pub use crate::domain::account::{Account, AccountState, FundsAction, TraderAccount};
    pub use crate::domain::quote::{Quote, QuotesState};
    pub use crate::domain::trader::{DirectoryState, NewTrader, Trader, TraderDraft, TraderField};

    // Client
    pub use crate::client::{DashboardClient, DashboardClientBuilder};
    pub use crate::config::DashboardConfig;
    pub use crate::http::RetryPolicy;

    // Navigation and views
    pub use crate::router::{navigate, Route};
    pub use crate::view::{
        mount, ActionOutcome, MountedView, QuotesView, TraderAccountView, TraderDirectoryView,
    };

    // Errors
    pub use crate::error::{DashboardError, HttpError};
}
