//! Shared plumbing for the awsign service clients.
//!
//! This crate sits between the signing core in `awsign-auth` and the
//! per-service clients. It provides configuration, the client error
//! taxonomy, region and endpoint lookup, identifier validation, the object
//! key path utility, and the [`Operation`] pipeline driven by
//! [`ServiceClient`] over an [`HttpTransport`].

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod operation;
pub mod path;
pub mod region;
pub mod transport;
pub mod validation;

pub use client::ServiceClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, HttpFailure, ValidationError};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use operation::{Operation, Target};
pub use region::{Endpoint, S3Region, SesRegion, SqsRegion};
pub use transport::HttpTransport;
