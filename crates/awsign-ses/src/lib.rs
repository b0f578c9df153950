//! SES client for awsign.
//!
//! Requests are signed with the AWS3-HTTPS scheme, which signs nothing but
//! the `Date` header, and sent as form bodies to `POST /`.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use awsign_auth::Credentials;
//! use awsign_core::{MockTransport, SesRegion};
//! use awsign_ses::SesClient;
//!
//! # async fn demo() -> awsign_core::ClientResult<()> {
//! let credentials = Arc::new(Credentials::new("AKID", "secret"));
//! let client = SesClient::new(credentials, SesRegion::UsEast, Arc::new(MockTransport::new()));
//!
//! client
//!     .send_text_email("me@example.com", "you@example.com", None, "Hello", "Hi there")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod message;
mod ops;

pub use client::SesClient;
pub use message::{Body, Content, Destination, Message, UTF_8};
