//! The S3 client.

use std::sync::Arc;

use awsign_auth::{Credentials, RequestSigner};
use awsign_core::{ClientConfig, ClientResult, Endpoint, HttpTransport, S3Region, ServiceClient};
use bytes::Bytes;
use tracing::debug;

use crate::ops::bucket::{CreateBucket, DeleteBucket, ListBuckets, ListObjects};
use crate::ops::object::{DeleteObject, GetObject, HeadObject, PutObject, PutObjectOp, PutObjectResult};

/// S3 client signing with the S3 REST scheme (HMAC-SHA1).
///
/// Buckets are addressed virtual-host style, `<bucket>.<endpoint>`. Object
/// keys are given as path segments, each encoded on its own, so a segment may
/// itself contain `/`.
///
/// Response bodies are returned unparsed.
#[derive(Debug, Clone)]
pub struct S3Client {
    inner: ServiceClient,
    region: S3Region,
}

impl S3Client {
    /// Create a client for `region`'s public endpoint.
    #[must_use]
    pub fn new(
        credentials: Arc<Credentials>,
        region: S3Region,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::with_endpoint(credentials, region, Endpoint::from(region), transport)
    }

    /// Create a client sending to `endpoint`. `region` still decides the
    /// location constraint of new buckets.
    #[must_use]
    pub fn with_endpoint(
        credentials: Arc<Credentials>,
        region: S3Region,
        endpoint: Endpoint,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            inner: ServiceClient::new(RequestSigner::s3(credentials), endpoint, transport),
            region,
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &ClientConfig, transport: Arc<dyn HttpTransport>) -> ClientResult<Self> {
        let credentials = config.credentials()?;
        let region: S3Region = config.region.parse()?;
        let endpoint = config.endpoint()?.unwrap_or_else(|| Endpoint::from(region));
        debug!(region = region.id(), %endpoint, "Creating S3 client");
        Ok(Self::with_endpoint(credentials, region, endpoint, transport))
    }

    /// The region this client creates buckets in.
    #[must_use]
    pub fn region(&self) -> S3Region {
        self.region
    }

    /// The underlying pipeline.
    #[must_use]
    pub fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// List all buckets owned by the caller. Returns the raw
    /// `ListAllMyBucketsResult` document.
    pub async fn list_buckets(&self) -> ClientResult<Bytes> {
        self.inner.execute(&ListBuckets).await
    }

    /// List objects in `bucket`, starting after `marker` and restricted to
    /// keys under `prefix`. Returns the raw `ListBucketResult` document.
    pub async fn list_objects(
        &self,
        bucket: &str,
        marker: Option<&str>,
        prefix: &[&str],
    ) -> ClientResult<Bytes> {
        self.inner
            .execute(&ListObjects {
                bucket,
                marker,
                prefix,
            })
            .await
    }

    /// Create `bucket` in this client's region.
    pub async fn create_bucket(&self, bucket: &str) -> ClientResult<()> {
        self.inner
            .execute(&CreateBucket {
                bucket,
                region: self.region,
            })
            .await
    }

    /// Delete the empty `bucket`.
    pub async fn delete_bucket(&self, bucket: &str) -> ClientResult<()> {
        self.inner.execute(&DeleteBucket { bucket }).await
    }

    /// Store `object` under the key formed by `path`.
    pub async fn put_object(
        &self,
        bucket: &str,
        object: &PutObject,
        path: &[&str],
    ) -> ClientResult<PutObjectResult> {
        self.inner
            .execute(&PutObjectOp {
                bucket,
                object,
                path,
            })
            .await
    }

    /// Fetch the object at `path`.
    pub async fn get_object(&self, bucket: &str, path: &[&str]) -> ClientResult<Bytes> {
        self.inner.execute(&GetObject { bucket, path }).await
    }

    /// Delete the object at `path`.
    pub async fn delete_object(&self, bucket: &str, path: &[&str]) -> ClientResult<()> {
        self.inner.execute(&DeleteObject { bucket, path }).await
    }

    /// Whether an object exists at `path`: `true` on 200, `false` on 404.
    /// Any other status is an error.
    pub async fn object_exists(&self, bucket: &str, path: &[&str]) -> ClientResult<bool> {
        self.inner.execute(&HeadObject { bucket, path }).await
    }
}
