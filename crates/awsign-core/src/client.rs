//! Service client orchestration.

use std::sync::Arc;

use awsign_auth::{AwsRequest, RequestSigner, SignedRequest};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::error::{ClientError, ClientResult};
use crate::operation::{Operation, Target};
use crate::region::Endpoint;
use crate::transport::HttpTransport;

/// Runs [`Operation`]s against one service endpoint.
///
/// Holds a signer, an endpoint and a transport. Cheap to clone; every clone
/// shares the same credentials and transport.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    signer: RequestSigner,
    endpoint: Endpoint,
    transport: Arc<dyn HttpTransport>,
}

impl ServiceClient {
    /// Create a client.
    #[must_use]
    pub fn new(signer: RequestSigner, endpoint: Endpoint, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            signer,
            endpoint,
            transport,
        }
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The signer requests are signed with.
    #[must_use]
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Validate, prepare and sign `op` at `now` without sending it.
    pub fn sign<O: Operation>(&self, op: &O, now: DateTime<Utc>) -> ClientResult<SignedRequest> {
        op.validate().inspect_err(|err| {
            debug!(operation = op.name(), error = %err, "Validation failed");
        })?;

        let (url, resource) = self.resolve(op.target());
        trace!(operation = op.name(), %url, "Preparing request");

        let mut builder = AwsRequest::builder(op.method(), &url);
        if let Some(resource) = resource {
            builder = builder.resource(resource);
        }
        let request = op.prepare(builder).build()?;

        Ok(self.signer.sign(&request, now)?)
    }

    /// Run `op` to completion.
    ///
    /// The timestamp is captured once here and used for every date the
    /// signer writes.
    pub async fn execute<O: Operation>(&self, op: &O) -> ClientResult<O::Output> {
        let signed = self.sign(op, Utc::now())?;
        debug!(
            operation = op.name(),
            method = %signed.method(),
            uri = %signed.uri(),
            "Dispatching request"
        );

        let response: http::Response<Bytes> = self
            .transport
            .execute(signed.into_http())
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let result = op.classify(response);
        match &result {
            Ok(_) => debug!(operation = op.name(), %status, "Request succeeded"),
            Err(err) => warn!(operation = op.name(), %status, error = %err, "Request failed"),
        }
        result
    }

    /// Resolve a target to a URL and an optional signing resource.
    fn resolve(&self, target: Target) -> (String, Option<String>) {
        match target {
            Target::Path(path) => (self.endpoint.url(None, &path), None),
            Target::Resource { name, path } => {
                let url = self.endpoint.url(Some(&name), &path);
                (url, Some(name))
            }
            Target::Absolute(url) if is_absolute(&url) => (url, None),
            Target::Absolute(path) => {
                let path = if path.starts_with('/') {
                    path
                } else {
                    format!("/{path}")
                };
                (self.endpoint.url(None, &path), None)
            }
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
