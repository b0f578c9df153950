//! A recording transport for tests.

use std::collections::VecDeque;

use anyhow::anyhow;
use bytes::Bytes;
use http::StatusCode;
use parking_lot::Mutex;

use crate::transport::HttpTransport;

/// Returns queued responses in order and records every request it receives.
///
/// When the queue is empty it answers `200 OK` with an empty body.
///
/// # Examples
///
/// ```
/// use awsign_core::MockTransport;
/// use http::StatusCode;
///
/// let transport = MockTransport::new();
/// transport.respond(StatusCode::NO_CONTENT, "");
/// assert!(transport.requests().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<http::Request<Bytes>>>,
}

#[derive(Debug)]
enum MockResponse {
    Response(http::Response<Bytes>),
    Failure(String),
}

impl MockTransport {
    /// Create a transport with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    pub fn respond(&self, status: StatusCode, body: impl Into<Bytes>) {
        let mut response = http::Response::new(body.into());
        *response.status_mut() = status;
        self.respond_with(response);
    }

    /// Queue a fully built response.
    pub fn respond_with(&self, response: http::Response<Bytes>) {
        self.responses
            .lock()
            .push_back(MockResponse::Response(response));
    }

    /// Queue a transport-level failure.
    pub fn fail(&self, message: impl Into<String>) {
        self.responses
            .lock()
            .push_back(MockResponse::Failure(message.into()));
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<http::Request<Bytes>> {
        self.requests.lock().clone()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<http::Request<Bytes>> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
        self.requests.lock().push(request);
        match self.responses.lock().pop_front() {
            Some(MockResponse::Response(response)) => Ok(response),
            Some(MockResponse::Failure(message)) => Err(anyhow!(message)),
            None => Ok(http::Response::new(Bytes::new())),
        }
    }
}
