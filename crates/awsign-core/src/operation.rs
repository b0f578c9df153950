//! The per-call pipeline contract.
//!
//! Every service call is an [`Operation`]. The [`ServiceClient`] drives it
//! through a fixed sequence: [`validate`](Operation::validate), request
//! construction from [`method`](Operation::method) and
//! [`target`](Operation::target), [`prepare`](Operation::prepare), signing,
//! dispatch and finally [`classify`](Operation::classify).
//!
//! [`ServiceClient`]: crate::ServiceClient

use awsign_auth::RequestBuilder;
use bytes::Bytes;
use http::{Method, StatusCode};

use crate::error::{ClientError, ClientResult, HttpFailure, ValidationError};

/// Where an operation sends its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A path on the service endpoint.
    Path(String),
    /// A path on the virtual host `<name>.<endpoint>`. `name` takes part in
    /// the S3 signature as the resource.
    Resource {
        /// Virtual-host name, the bucket for S3.
        name: String,
        /// Raw, already encoded path starting with `/`.
        path: String,
    },
    /// A complete `http(s)://` URL used verbatim, such as an SQS queue URL.
    /// Anything else is treated as a path on the service endpoint.
    Absolute(String),
}

/// One service call.
pub trait Operation: Send + Sync {
    /// What the call produces on success.
    type Output;

    /// Operation name for logging.
    fn name(&self) -> &'static str;

    /// HTTP method.
    fn method(&self) -> Method;

    /// Request target.
    fn target(&self) -> Target;

    /// The single status that means success.
    fn expected_status(&self) -> StatusCode {
        StatusCode::OK
    }

    /// Check caller input. Runs before anything else; a failure aborts the
    /// call with no request built.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Add call-specific headers, parameters and body.
    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
    }

    /// Turn a response with the expected status into the output.
    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Self::Output>;

    /// Classify a response. The default compares its status with
    /// [`expected_status`](Operation::expected_status) and reports any other
    /// status as [`ClientError::Status`].
    fn classify(&self, response: http::Response<Bytes>) -> ClientResult<Self::Output> {
        if response.status() == self.expected_status() {
            self.success(response)
        } else {
            Err(failure(response))
        }
    }
}

/// Snapshot a response as an [`HttpFailure`].
#[must_use]
pub fn failure(response: http::Response<Bytes>) -> ClientError {
    let status = response.status();
    ClientError::Status(HttpFailure {
        status,
        body: response.into_body(),
    })
}
