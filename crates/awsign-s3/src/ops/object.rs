//! Object operations: `PutObject`, `GetObject`, `DeleteObject` and the
//! `HEAD` existence check.

use awsign_auth::RequestBuilder;
use awsign_core::operation::failure;
use awsign_core::path::join_path;
use awsign_core::validation::validate_bucket_name;
use awsign_core::{ClientResult, Operation, Target, ValidationError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use http::{Method, StatusCode};
use md5::{Digest, Md5};

/// Storage class header.
pub const STORAGE_CLASS: &str = "x-amz-storage-class";

/// Storage class value for reduced redundancy storage.
pub const REDUCED_REDUNDANCY: &str = "REDUCED_REDUNDANCY";

/// Response header carrying the version of a stored object.
pub const VERSION_ID: &str = "x-amz-version-id";

/// An object to upload.
///
/// # Examples
///
/// ```
/// use awsign_s3::PutObject;
///
/// let object = PutObject::new("hello")
///     .content_type("text/plain")
///     .reduced_redundancy(true);
/// assert_eq!(object.body.as_ref(), b"hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PutObject {
    /// Object payload.
    pub body: Bytes,
    /// `Content-Type` to store the object with.
    pub content_type: Option<String>,
    /// Store with reduced redundancy.
    pub reduced_redundancy: bool,
}

impl PutObject {
    /// Create an upload of `body` with default settings.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Set the content type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Enable or disable reduced redundancy storage.
    #[must_use]
    pub fn reduced_redundancy(mut self, enabled: bool) -> Self {
        self.reduced_redundancy = enabled;
        self
    }
}

/// What S3 returns for a stored object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PutObjectResult {
    /// The `ETag` response header.
    pub etag: Option<String>,
    /// The `x-amz-version-id` response header, set on versioned buckets.
    pub version_id: Option<String>,
}

/// Base64 of the MD5 digest of `data`, as sent in `Content-MD5`.
///
/// # Examples
///
/// ```
/// use awsign_s3::content_md5;
///
/// assert_eq!(content_md5(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
/// ```
#[must_use]
pub fn content_md5(data: &[u8]) -> String {
    BASE64.encode(Md5::digest(data))
}

/// The encoded object path `/<segment>/<segment>...`.
pub(crate) fn object_path(path: &[&str]) -> String {
    format!("/{}", join_path(path))
}

fn validate_object(bucket: &str, path: &[&str]) -> Result<(), ValidationError> {
    validate_bucket_name(bucket)?;
    if path.iter().all(|segment| segment.is_empty()) {
        return Err(ValidationError::Missing("key"));
    }
    Ok(())
}

fn object_target(bucket: &str, path: &[&str]) -> Target {
    Target::Resource {
        name: bucket.to_owned(),
        path: object_path(path),
    }
}

fn header(response: &http::Response<Bytes>, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

pub(crate) struct PutObjectOp<'a> {
    pub bucket: &'a str,
    pub object: &'a PutObject,
    pub path: &'a [&'a str],
}

impl Operation for PutObjectOp<'_> {
    type Output = PutObjectResult;

    fn name(&self) -> &'static str {
        "PutObject"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn target(&self) -> Target {
        object_target(self.bucket, self.path)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_object(self.bucket, self.path)
    }

    fn prepare(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if self.object.reduced_redundancy {
            builder = builder.header(STORAGE_CLASS, REDUCED_REDUNDANCY);
        }
        if let Some(content_type) = &self.object.content_type {
            builder = builder.header("Content-Type", content_type);
        }
        builder
            .header("Content-MD5", &content_md5(&self.object.body))
            .body(self.object.body.clone())
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<PutObjectResult> {
        Ok(PutObjectResult {
            etag: header(&response, "etag"),
            version_id: header(&response, VERSION_ID),
        })
    }
}

pub(crate) struct GetObject<'a> {
    pub bucket: &'a str,
    pub path: &'a [&'a str],
}

impl Operation for GetObject<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "GetObject"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn target(&self) -> Target {
        object_target(self.bucket, self.path)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_object(self.bucket, self.path)
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct DeleteObject<'a> {
    pub bucket: &'a str,
    pub path: &'a [&'a str],
}

impl Operation for DeleteObject<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        "DeleteObject"
    }

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn target(&self) -> Target {
        object_target(self.bucket, self.path)
    }

    fn expected_status(&self) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_object(self.bucket, self.path)
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}

pub(crate) struct HeadObject<'a> {
    pub bucket: &'a str,
    pub path: &'a [&'a str],
}

impl Operation for HeadObject<'_> {
    type Output = bool;

    fn name(&self) -> &'static str {
        "HeadObject"
    }

    fn method(&self) -> Method {
        Method::HEAD
    }

    fn target(&self) -> Target {
        object_target(self.bucket, self.path)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_object(self.bucket, self.path)
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<bool> {
        Ok(true)
    }

    fn classify(&self, response: http::Response<Bytes>) -> ClientResult<bool> {
        match response.status() {
            StatusCode::OK => self.success(response),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(failure(response)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_compute_content_md5() {
        assert_eq!(content_md5(b"hello"), "XUFAKrxLKna5cZ2REBfFkg==");
    }

    #[test]
    fn test_should_build_object_path() {
        assert_eq!(object_path(&["photos", "", "my cat.jpg"]), "/photos/my%20cat.jpg");
        assert_eq!(object_path(&[]), "/");
    }

    #[test]
    fn test_should_require_object_key() {
        assert!(matches!(
            validate_object("my-bucket", &["", ""]),
            Err(ValidationError::Missing("key"))
        ));
        assert!(matches!(
            validate_object("B", &["k"]),
            Err(ValidationError::InvalidBucketName(_))
        ));
        assert!(validate_object("my-bucket", &["k"]).is_ok());
    }

    #[test]
    fn test_should_classify_head_status() {
        let op = HeadObject {
            bucket: "my-bucket",
            path: &["k"],
        };
        let respond = |status| {
            let mut response = http::Response::new(Bytes::new());
            *response.status_mut() = status;
            response
        };
        assert!(op.classify(respond(StatusCode::OK)).unwrap());
        assert!(!op.classify(respond(StatusCode::NOT_FOUND)).unwrap());
        assert_eq!(
            op.classify(respond(StatusCode::FORBIDDEN))
                .unwrap_err()
                .status(),
            Some(StatusCode::FORBIDDEN)
        );
    }
}
