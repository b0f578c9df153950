//! AWS3-HTTPS request signing.
//!
//! Only the `Date` header value is signed. The result is carried in:
//!
//! ```text
//! X-Amzn-Authorization: AWS3-HTTPS AWSAccessKeyId=<key>, Algorithm=<alg>, Signature=<sig>
//! ```
//!
//! Parameters go into the form body in insertion order.

use http::header::{HeaderName, HeaderValue};
use tracing::debug;

use crate::algorithm::{SigningAlgorithm, sign};
use crate::credentials::Credentials;
use crate::error::SigningError;
use crate::params::form_encode;
use crate::request::{AwsRequest, SignedRequest};

/// Header carrying the AWS3-HTTPS authorization.
pub const X_AMZN_AUTHORIZATION: &str = "x-amzn-authorization";

/// Scheme token at the start of the authorization header.
pub const AWS3_HTTPS: &str = "AWS3-HTTPS";

/// Render the authorization header value.
///
/// # Examples
///
/// ```
/// use awsign_auth::SigningAlgorithm;
/// use awsign_auth::aws3::authorization;
///
/// assert_eq!(
///     authorization("AKID", SigningAlgorithm::HmacSha256, "c2ln"),
///     "AWS3-HTTPS AWSAccessKeyId=AKID, Algorithm=HmacSHA256, Signature=c2ln"
/// );
/// ```
#[must_use]
pub fn authorization(access_key_id: &str, algorithm: SigningAlgorithm, signature: &str) -> String {
    format!("{AWS3_HTTPS} AWSAccessKeyId={access_key_id}, Algorithm={algorithm}, Signature={signature}")
}

/// Sign `date`, the exact `Date` header value, and attach the authorization
/// header to `request`.
pub(crate) fn sign_request(
    request: &AwsRequest,
    credentials: &Credentials,
    algorithm: SigningAlgorithm,
    date: &str,
) -> Result<SignedRequest, SigningError> {
    debug!(string_to_sign = ?date, "Signing AWS3-HTTPS date");
    let signature = sign(credentials, algorithm, date)?;

    let value = authorization(credentials.access_key_id(), algorithm, &signature);
    let mut headers = request.headers().clone();
    headers.insert(
        HeaderName::from_static(X_AMZN_AUTHORIZATION),
        HeaderValue::try_from(value).map_err(|_| SigningError::InvalidHeader {
            name: X_AMZN_AUTHORIZATION.to_owned(),
        })?,
    );

    Ok(SignedRequest {
        method: request.method().clone(),
        uri: request.uri().clone(),
        headers,
        body: form_encode(request.params()).into(),
    })
}
