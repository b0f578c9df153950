//! Request parameters.
//!
//! Parameters are kept as an ordered list of name/value pairs. A value of
//! `None` is a key-only parameter such as `?acl`. Ordering matters: the query
//! API signs a sorted copy, while the wire form keeps insertion order.

/// A single request parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter value, `None` for key-only parameters.
    pub value: Option<String>,
}

impl Param {
    /// Create a `name=value` parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a key-only parameter.
    pub fn key_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Sort parameters by name, keeping the relative order of equal names.
///
/// # Examples
///
/// ```
/// use awsign_auth::params::{Param, sort_params};
///
/// let mut params = vec![Param::new("b", "2"), Param::new("a", "1"), Param::new("a", "0")];
/// sort_params(&mut params);
/// assert_eq!(
///     params,
///     vec![Param::new("a", "1"), Param::new("a", "0"), Param::new("b", "2")]
/// );
/// ```
pub fn sort_params(params: &mut [Param]) {
    // `sort_by` is a stable merge sort.
    params.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Render parameters as `application/x-www-form-urlencoded`.
///
/// Spaces become `+`; alphanumerics and `*-._` are kept; everything else is
/// percent-encoded. Key-only parameters render as the bare name.
#[must_use]
pub fn form_encode(params: &[Param]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for param in params {
        match &param.value {
            Some(value) => serializer.append_pair(&param.name, value),
            None => serializer.append_key_only(&param.name),
        };
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_sort_stably_by_name() {
        let mut params = vec![Param::new("b", "2"), Param::new("a", "1"), Param::new("a", "0")];
        sort_params(&mut params);
        let rendered: Vec<_> = params
            .iter()
            .map(|p| (p.name.as_str(), p.value.as_deref()))
            .collect();
        assert_eq!(
            rendered,
            vec![("a", Some("1")), ("a", Some("0")), ("b", Some("2"))]
        );
    }

    #[test]
    fn test_should_sort_uppercase_before_lowercase() {
        let mut params = vec![Param::new("Version", "1"), Param::new("AWSAccessKeyId", "k")];
        sort_params(&mut params);
        assert_eq!(params[0].name, "AWSAccessKeyId");
    }

    #[test]
    fn test_should_form_encode_pairs_and_bare_keys() {
        let params = vec![
            Param::new("MessageBody", "hello world*~"),
            Param::key_only("acl"),
            Param::new("Timestamp", "2013-01-01T00:00:00Z"),
        ];
        assert_eq!(
            form_encode(&params),
            "MessageBody=hello+world*%7E&acl&Timestamp=2013-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_should_form_encode_empty_list() {
        assert_eq!(form_encode(&[]), "");
    }
}
