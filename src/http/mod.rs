//! HTTP client layer: `DashboardHttp` over a pluggable [`Transport`].

pub mod client;
pub mod retry;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use client::DashboardHttp;
pub use retry::{RetryConfig, RetryPolicy};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};

#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
