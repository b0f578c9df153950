//! Live integration tests for the awsign clients.
//!
//! These tests talk to a real endpoint and are marked `#[ignore]` so they
//! don't run during normal `cargo test`. Configuration comes from the
//! environment (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`,
//! `DEFAULT_REGION`, `AWSIGN_ENDPOINT_URL`). Without credentials and an
//! endpoint they default to `test`/`test` against `http://localhost:4566`.
//!
//! Run them with:
//! ```text
//! cargo test -p awsign-integration -- --ignored
//! ```

use std::sync::{Arc, Once};

use async_trait::async_trait;
use awsign_core::{ClientConfig, HttpTransport};
use awsign_s3::S3Client;
use awsign_ses::SesClient;
use awsign_sqs::SqsClient;
use bytes::Bytes;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing(level: &str) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
            )
            .with_test_writer()
            .init();
    });
}

/// [`HttpTransport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
        let (parts, body) = request.into_parts();
        let response = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

/// Configuration from the environment with local defaults filled in.
#[must_use]
pub fn config() -> ClientConfig {
    let mut config = ClientConfig::from_env();
    config.access_key_id.get_or_insert_with(|| "test".to_owned());
    config
        .secret_access_key
        .get_or_insert_with(|| "test".to_owned());
    config
        .endpoint_url
        .get_or_insert_with(|| "http://localhost:4566".to_owned());
    init_tracing(&config.log_level);
    config
}

fn transport() -> Arc<dyn HttpTransport> {
    Arc::new(ReqwestTransport::default())
}

/// Create an S3 client for the configured endpoint.
#[must_use]
pub fn s3_client() -> S3Client {
    S3Client::from_config(&config(), transport()).expect("valid S3 configuration")
}

/// Create an SQS client for the configured endpoint.
#[must_use]
pub fn sqs_client() -> SqsClient {
    SqsClient::from_config(&config(), transport()).expect("valid SQS configuration")
}

/// Create an SES client for the configured endpoint.
#[must_use]
pub fn ses_client() -> SesClient {
    SesClient::from_config(&config(), transport()).expect("valid SES configuration")
}

/// Generate a unique resource name for a test.
#[must_use]
pub fn test_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

mod test_s3;
mod test_ses;
mod test_sqs;
