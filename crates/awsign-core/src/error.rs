//! Error types for service clients.

use std::fmt;

use awsign_auth::{RequestError, SigningError};
use bytes::Bytes;
use http::StatusCode;

/// Caller input rejected before any request is signed or sent.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Bucket name does not match the S3 naming pattern.
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    /// Queue name does not match the SQS naming pattern.
    #[error("invalid queue name: {0}")]
    InvalidQueueName(String),

    /// Email address is not a plausible `local@domain` address.
    #[error("invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// A numeric argument exceeds its ceiling.
    #[error("{name} must not exceed {max}, got {value}")]
    OutOfRange {
        /// Argument name.
        name: &'static str,
        /// Value supplied.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },

    /// A required argument is missing or empty.
    #[error("missing required value: {0}")]
    Missing(&'static str),

    /// The endpoint is neither a bare host nor an `http(s)://` URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The prepared request could not be built.
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// A response whose status did not match the one the operation expects.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpFailure {
    /// Status returned by the service.
    pub status: StatusCode,
    /// Response body as received.
    pub body: Bytes,
}

impl fmt::Debug for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFailure")
            .field("status", &self.status)
            .field("body", &String::from_utf8_lossy(&self.body))
            .finish()
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected status {}", self.status)
    }
}

/// Everything a service call can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input was rejected before dispatch.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be signed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The service answered with a status other than the expected one.
    #[error("{0}")]
    Status(HttpFailure),

    /// The transport failed before a response was received.
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),
}

impl ClientError {
    /// The response status, if the service answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(failure) => Some(failure.status),
            _ => None,
        }
    }
}

impl From<RequestError> for ClientError {
    fn from(err: RequestError) -> Self {
        Self::Validation(ValidationError::Request(err))
    }
}

/// Convenience result type for service calls.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_out_of_range() {
        let err = ValidationError::OutOfRange {
            name: "MaxNumberOfMessages",
            value: 11,
            max: 10,
        };
        assert_eq!(err.to_string(), "MaxNumberOfMessages must not exceed 10, got 11");
    }

    #[test]
    fn test_should_expose_status_of_failure() {
        let err = ClientError::Status(HttpFailure {
            status: StatusCode::FORBIDDEN,
            body: Bytes::from_static(b"<Error/>"),
        });
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(err.to_string(), "unexpected status 403 Forbidden");
        assert!(ClientError::from(ValidationError::Missing("body")).status().is_none());
    }
}
