//! S3 client for awsign.
//!
//! Requests are signed with the S3 REST scheme and sent through a caller
//! supplied [`HttpTransport`](awsign_core::HttpTransport).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use awsign_auth::Credentials;
//! use awsign_core::{MockTransport, S3Region};
//! use awsign_s3::{PutObject, S3Client};
//!
//! # async fn demo() -> awsign_core::ClientResult<()> {
//! let credentials = Arc::new(Credentials::new("AKID", "secret"));
//! let client = S3Client::new(credentials, S3Region::UsEast, Arc::new(MockTransport::new()));
//!
//! client.create_bucket("my-bucket").await?;
//! client
//!     .put_object("my-bucket", &PutObject::new("hello"), &["docs", "hello.txt"])
//!     .await?;
//! assert!(client.object_exists("my-bucket", &["docs", "hello.txt"]).await?);
//! # Ok(())
//! # }
//! ```

pub mod client;
mod ops;

pub use client::S3Client;
pub use ops::bucket::{PARAM_MARKER, PARAM_PREFIX};
pub use ops::object::{
    PutObject, PutObjectResult, REDUCED_REDUNDANCY, STORAGE_CLASS, VERSION_ID, content_md5,
};
