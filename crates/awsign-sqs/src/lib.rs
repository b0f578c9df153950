//! SQS client for awsign.
//!
//! Requests are signed with query API Signature Version 2 and sent as form
//! bodies through a caller supplied [`HttpTransport`](awsign_core::HttpTransport).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use awsign_auth::Credentials;
//! use awsign_core::{MockTransport, SqsRegion};
//! use awsign_sqs::SqsClient;
//!
//! # async fn demo() -> awsign_core::ClientResult<()> {
//! let credentials = Arc::new(Credentials::new("AKID", "secret"));
//! let client = SqsClient::new(credentials, SqsRegion::UsEast, Arc::new(MockTransport::new()));
//!
//! client.create_queue("jobs", Some(60)).await?;
//! let queue = "https://sqs.us-east-1.amazonaws.com/123456789012/jobs";
//! client.send_message(queue, "hello").await?;
//! let messages = client.receive_message(queue, Some(20), Some(10)).await?;
//! # let _ = messages;
//! # Ok(())
//! # }
//! ```

pub mod client;
mod ops;

pub use client::SqsClient;
pub use ops::{MAX_NUMBER_OF_MESSAGES, MAX_VISIBILITY_TIMEOUT, MAX_WAIT_TIME_SECONDS};
