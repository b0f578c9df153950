//! The request model handed to a signer.
//!
//! An [`AwsRequest`] is assembled through a [`RequestBuilder`] during the
//! prepare stage and is immutable afterwards. Signing never touches it: the
//! signer derives a separate [`SignedRequest`] holding the exact bytes to put
//! on the wire, so a stale signature cannot be paired with a modified request.

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::uri::PathAndQuery;
use http::{Method, Uri};

use crate::error::RequestError;
use crate::params::Param;

/// An unsigned request: method, target, headers, parameters, body and an
/// optional virtual-host resource (for S3, the bucket name).
#[derive(Debug, Clone)]
pub struct AwsRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    params: Vec<Param>,
    resource: Option<String>,
    body: Bytes,
}

impl AwsRequest {
    /// Start building a request for `method` and `uri`.
    ///
    /// # Examples
    ///
    /// ```
    /// use awsign_auth::AwsRequest;
    /// use http::Method;
    ///
    /// let request = AwsRequest::builder(Method::GET, "https://my-bucket.s3.amazonaws.com/a.txt")
    ///     .resource("my-bucket")
    ///     .param_key_only("acl")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.path(), "/a.txt");
    /// assert_eq!(request.resource(), Some("my-bucket"));
    /// ```
    #[must_use]
    pub fn builder(method: Method, uri: &str) -> RequestBuilder {
        RequestBuilder::new(method, uri)
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The target URI, without any signer-generated query string.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The raw URI path, `/` when the URI carries none.
    #[must_use]
    pub fn path(&self) -> &str {
        match self.uri.path() {
            "" => "/",
            path => path,
        }
    }

    /// The host component of the URI, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.uri.host()
    }

    /// All headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The first value of a header, matched case-insensitively.
    ///
    /// Values that are not visible ASCII are read lossily.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
    }

    /// Parameters in insertion order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The virtual-host resource, if set.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// The request payload.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub(crate) fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

/// Builder for [`AwsRequest`].
///
/// Like [`http::request::Builder`], invalid input is recorded and reported
/// once by [`RequestBuilder::build`] so calls can be chained.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    uri: String,
    headers: HeaderMap,
    params: Vec<Param>,
    resource: Option<String>,
    body: Bytes,
    error: Option<RequestError>,
}

impl RequestBuilder {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: HeaderMap::new(),
            params: Vec::new(),
            resource: None,
            body: Bytes::new(),
            error: None,
        }
    }

    /// Set a header, replacing any existing values for it.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let Some((name, value)) = self.parse_header(name, value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Append a header value without removing existing ones.
    #[must_use]
    pub fn append_header(mut self, name: &str, value: &str) -> Self {
        if let Some((name, value)) = self.parse_header(name, value) {
            self.headers.append(name, value);
        }
        self
    }

    /// Set a header only if it is not already present.
    #[must_use]
    pub fn header_if_absent(self, name: &str, value: &str) -> Self {
        if self.headers.contains_key(name) {
            return self;
        }
        self.header(name, value)
    }

    /// Append a `name=value` parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(Param::new(name, value));
        self
    }

    /// Append a parameter only when `value` is present.
    #[must_use]
    pub fn param_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Append a key-only parameter.
    #[must_use]
    pub fn param_key_only(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param::key_only(name));
        self
    }

    /// Set the virtual-host resource.
    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the request payload.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Finish the request.
    pub fn build(self) -> Result<AwsRequest, RequestError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let uri: Uri = self
            .uri
            .parse()
            .map_err(|_| RequestError::InvalidUri(self.uri.clone()))?;
        let (uri, mut params) = split_query(uri)?;
        params.extend(self.params);

        Ok(AwsRequest {
            method: self.method,
            uri,
            headers: self.headers,
            params,
            resource: self.resource,
            body: self.body,
        })
    }

    fn parse_header(&mut self, name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
        if self.error.is_some() {
            return None;
        }
        let Ok(header_name) = HeaderName::try_from(name) else {
            self.error = Some(RequestError::InvalidHeaderName(name.to_owned()));
            return None;
        };
        let Ok(header_value) = HeaderValue::try_from(value) else {
            self.error = Some(RequestError::InvalidHeaderValue {
                name: name.to_owned(),
            });
            return None;
        };
        Some((header_name, header_value))
    }
}

/// Move a query string already present on `uri` into the parameter list.
fn split_query(uri: Uri) -> Result<(Uri, Vec<Param>), RequestError> {
    let Some(query) = uri.query() else {
        return Ok((uri, Vec::new()));
    };

    let params = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (name, value) = form_urlencoded::parse(pair.as_bytes()).next()?;
            Some(if pair.contains('=') {
                Param::new(name, value)
            } else {
                Param::key_only(name)
            })
        })
        .collect();

    let path = match uri.path() {
        "" => "/".to_owned(),
        path => path.to_owned(),
    };
    let mut parts = uri.into_parts();
    parts.path_and_query = Some(
        PathAndQuery::try_from(path.as_str()).map_err(|_| RequestError::InvalidUri(path.clone()))?,
    );
    let uri = Uri::from_parts(parts).map_err(|_| RequestError::InvalidUri(path))?;
    Ok((uri, params))
}

/// A request carrying its signature, in the exact form to send.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl SignedRequest {
    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The full request URI, including any query string.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Headers, including `Date` and the authorization header when the
    /// scheme uses one.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The first value of a header as a string, if it is visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The payload.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Convert into an [`http::Request`] for a transport.
    #[must_use]
    pub fn into_http(self) -> http::Request<Bytes> {
        let mut request = http::Request::new(self.body);
        *request.method_mut() = self.method;
        *request.uri_mut() = self.uri;
        *request.headers_mut() = self.headers;
        request
    }
}
