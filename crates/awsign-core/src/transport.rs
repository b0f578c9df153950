//! The HTTP transport seam.
//!
//! Service clients never open connections themselves. A signed request is
//! handed to an [`HttpTransport`], which returns the full response. Timeouts,
//! connection reuse and retries belong to the implementation.
//!
//! # Object safety
//!
//! The trait uses `#[async_trait]` so clients can hold an
//! `Arc<dyn HttpTransport>`.

use std::fmt;

use bytes::Bytes;

/// Sends a signed request and returns the buffered response.
#[async_trait::async_trait]
pub trait HttpTransport: fmt::Debug + Send + Sync {
    /// Send `request`.
    ///
    /// Any status code is a successful exchange; only I/O level failures are
    /// errors.
    async fn execute(&self, request: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>>;
}
