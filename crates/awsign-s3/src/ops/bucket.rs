//! Bucket operations: `ListBuckets`, `ListObjects`, `CreateBucket` and
//! `DeleteBucket`.

use awsign_auth::RequestBuilder;
use awsign_core::validation::validate_bucket_name;
use awsign_core::{ClientResult, Operation, S3Region, Target, ValidationError};
use bytes::Bytes;
use http::{Method, StatusCode};

/// `marker` query parameter for paginated listings.
pub const PARAM_MARKER: &str = "marker";

/// `prefix` query parameter restricting a listing.
pub const PARAM_PREFIX: &str = "prefix";

const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

pub(crate) struct ListBuckets;

impl Operation for ListBuckets {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "ListBuckets"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn target(&self) -> Target {
        Target::Path("/".to_owned())
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct ListObjects<'a> {
    pub bucket: &'a str,
    pub marker: Option<&'a str>,
    pub prefix: &'a [&'a str],
}

impl Operation for ListObjects<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "ListObjects"
    }

    fn method(&self) -> Method {
        Method::GET
    }

    fn target(&self) -> Target {
        Target::Resource {
            name: self.bucket.to_owned(),
            path: "/".to_owned(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_bucket_name(self.bucket)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        // The prefix is sent as plain text and form-encoded on the wire.
        let prefix = self
            .prefix
            .iter()
            .copied()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        builder
            .param_opt(PARAM_MARKER, self.marker)
            .param_opt(PARAM_PREFIX, (!prefix.is_empty()).then_some(prefix))
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct CreateBucket<'a> {
    pub bucket: &'a str,
    pub region: S3Region,
}

impl Operation for CreateBucket<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        "CreateBucket"
    }

    fn method(&self) -> Method {
        Method::PUT
    }

    fn target(&self) -> Target {
        Target::Resource {
            name: self.bucket.to_owned(),
            path: "/".to_owned(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_bucket_name(self.bucket)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.region.location_constraint() {
            Some(constraint) => builder.body(create_bucket_configuration(constraint)),
            None => builder,
        }
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}

/// The `CreateBucketConfiguration` document for a region constraint.
pub(crate) fn create_bucket_configuration(constraint: &str) -> String {
    format!(
        "<CreateBucketConfiguration xmlns=\"{S3_NAMESPACE}\">\
         <LocationConstraint>{constraint}</LocationConstraint>\
         </CreateBucketConfiguration>"
    )
}

pub(crate) struct DeleteBucket<'a> {
    pub bucket: &'a str,
}

impl Operation for DeleteBucket<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        "DeleteBucket"
    }

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn target(&self) -> Target {
        Target::Resource {
            name: self.bucket.to_owned(),
            path: "/".to_owned(),
        }
    }

    fn expected_status(&self) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_bucket_name(self.bucket)
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}
