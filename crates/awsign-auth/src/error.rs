//! Error types for request construction and signing.

/// Errors raised while computing or attaching a request signature.
///
/// These are configuration-level failures: retrying the same request with the
/// same credentials and algorithm will fail the same way.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The algorithm name does not resolve to a supported MAC construction.
    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The MAC could not be initialised with the secret key.
    #[error("Failed to initialise MAC with the secret key")]
    InvalidKey,

    /// The signed request URI could not be assembled.
    #[error("Invalid signed request URI: {0}")]
    InvalidUri(String),

    /// The computed value could not be carried in an HTTP header.
    #[error("Signed value is not a valid header value for {name}")]
    InvalidHeader {
        /// Name of the header being written.
        name: String,
    },
}

/// Errors raised by [`RequestBuilder::build`](crate::request::RequestBuilder::build).
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A header name is not a valid HTTP token.
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    /// A header value contains characters not allowed in HTTP headers.
    #[error("Invalid value for header {name}")]
    InvalidHeaderValue {
        /// The header the value was meant for.
        name: String,
    },

    /// The request target could not be parsed as a URI.
    #[error("Invalid request URI: {0}")]
    InvalidUri(String),
}
