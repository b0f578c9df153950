//! Query API request signing (Signature Version 2).
//!
//! The signer injects the authentication parameters, sorts everything by
//! name and signs:
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                lowercase(Host) + "\n" +
//!                Path + "\n" +
//!                CanonicalQuery
//! ```
//!
//! `CanonicalQuery` is the form-encoded sorted parameter list with `+`, `*`
//! and `%7E` rewritten to RFC 3986 form. The signature is then appended as
//! the `Signature` parameter and the whole list becomes the form body.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::algorithm::{SigningAlgorithm, sign};
use crate::credentials::Credentials;
use crate::error::SigningError;
use crate::params::{Param, form_encode, sort_params};
use crate::request::{AwsRequest, SignedRequest};
use crate::time::iso8601;

/// API version sent with every query request.
pub const API_VERSION: &str = "2012-11-05";

/// The signature version implemented here.
pub const SIGNATURE_VERSION: &str = "2";

/// Parameter carrying the access key ID.
pub const PARAM_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
/// Parameter carrying the API version.
pub const PARAM_VERSION: &str = "Version";
/// Parameter carrying the signature version.
pub const PARAM_SIGNATURE_VERSION: &str = "SignatureVersion";
/// Parameter carrying the request timestamp.
pub const PARAM_TIMESTAMP: &str = "Timestamp";
/// Parameter naming the MAC algorithm.
pub const PARAM_SIGNATURE_METHOD: &str = "SignatureMethod";
/// Parameter carrying the signature itself.
pub const PARAM_SIGNATURE: &str = "Signature";

/// The sorted parameter list that gets signed: the five authentication
/// parameters followed by the caller's, stably sorted by name.
#[must_use]
pub fn signing_params(
    request: &AwsRequest,
    credentials: &Credentials,
    algorithm: SigningAlgorithm,
    now: DateTime<Utc>,
) -> Vec<Param> {
    let mut params = vec![
        Param::new(PARAM_ACCESS_KEY_ID, credentials.access_key_id()),
        Param::new(PARAM_VERSION, API_VERSION),
        Param::new(PARAM_SIGNATURE_VERSION, SIGNATURE_VERSION),
        Param::new(PARAM_TIMESTAMP, iso8601(now)),
        Param::new(PARAM_SIGNATURE_METHOD, algorithm.name()),
    ];
    params.extend_from_slice(request.params());
    sort_params(&mut params);
    params
}

/// Form-encode `params` and apply the RFC 3986 substitutions, in order:
/// `+` to `%20`, `*` to `%2A`, `%7E` to `~`.
///
/// # Examples
///
/// ```
/// use awsign_auth::params::Param;
/// use awsign_auth::query::canonical_query;
///
/// let params = vec![Param::new("MessageBody", "a b*~")];
/// assert_eq!(canonical_query(&params), "MessageBody=a%20b%2A~");
/// ```
#[must_use]
pub fn canonical_query(params: &[Param]) -> String {
    form_encode(params)
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
}

/// Build the string to sign from its parts. `params` must already be sorted.
#[must_use]
pub fn string_to_sign(method: &str, host: &str, path: &str, params: &[Param]) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!(
        "{method}\n{}\n{path}\n{}",
        host.to_lowercase(),
        canonical_query(params)
    )
}

/// Sign `request`, replacing its body with the signed form.
pub(crate) fn sign_request(
    request: &AwsRequest,
    credentials: &Credentials,
    algorithm: SigningAlgorithm,
    now: DateTime<Utc>,
) -> Result<SignedRequest, SigningError> {
    let mut params = signing_params(request, credentials, algorithm, now);
    let string_to_sign = string_to_sign(
        request.method().as_str(),
        request.host().unwrap_or_default(),
        request.path(),
        &params,
    );
    debug!(string_to_sign = ?string_to_sign, "Built query string to sign");

    let signature = sign(credentials, algorithm, &string_to_sign)?;
    params.push(Param::new(PARAM_SIGNATURE, signature));

    Ok(SignedRequest {
        method: request.method().clone(),
        uri: request.uri().clone(),
        headers: request.headers().clone(),
        body: form_encode(&params).into(),
    })
}
