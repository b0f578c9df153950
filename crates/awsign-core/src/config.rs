//! Client configuration.
//!
//! Provides [`ClientConfig`] for the S3, SQS and SES clients. Values are
//! loaded from environment variables via [`ClientConfig::from_env`] or set
//! through the builder.

use std::fmt;
use std::sync::Arc;

use awsign_auth::Credentials;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ValidationError;
use crate::region::Endpoint;

/// Service client configuration.
///
/// # Examples
///
/// ```
/// use awsign_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .access_key_id(Some("AKID".into()))
///     .secret_access_key(Some("secret".into()))
///     .build();
/// assert_eq!(config.region, "us-east-1");
/// assert_eq!(config.credentials().unwrap().access_key_id(), "AKID");
/// ```
#[derive(Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Access key ID.
    #[builder(default)]
    pub access_key_id: Option<String>,

    /// Secret access key. Never serialized.
    #[builder(default)]
    #[serde(skip_serializing, default)]
    pub secret_access_key: Option<String>,

    /// Region identifier used to pick the service endpoint.
    #[builder(default = String::from("us-east-1"))]
    pub region: String,

    /// Endpoint override, a bare host or `http(s)://host[:port]`.
    #[builder(default)]
    pub endpoint_url: Option<String>,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_key_id: None,
            secret_access_key: None,
            region: String::from("us-east-1"),
            endpoint_url: None,
            log_level: String::from("info"),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_ACCESS_KEY_ID` | unset |
    /// | `AWS_SECRET_ACCESS_KEY` | unset |
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `AWSIGN_ENDPOINT_URL` | unset |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_ACCESS_KEY_ID") {
            config.access_key_id = Some(v);
        }
        if let Ok(v) = std::env::var("AWS_SECRET_ACCESS_KEY") {
            config.secret_access_key = Some(v);
        }
        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.region = v;
        }
        if let Ok(v) = std::env::var("AWSIGN_ENDPOINT_URL") {
            if !v.is_empty() {
                config.endpoint_url = Some(v);
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Build shared credentials from the configured key pair.
    pub fn credentials(&self) -> Result<Arc<Credentials>, ValidationError> {
        let access_key_id = self
            .access_key_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ValidationError::Missing("access_key_id"))?;
        let secret = self
            .secret_access_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(ValidationError::Missing("secret_access_key"))?;
        Ok(Arc::new(Credentials::new(access_key_id, secret)))
    }

    /// The endpoint override, parsed, if one is configured.
    pub fn endpoint(&self) -> Result<Option<Endpoint>, ValidationError> {
        self.endpoint_url.as_deref().map(Endpoint::parse).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.log_level, "info");
        assert!(config.endpoint_url.is_none());
        assert!(matches!(
            config.credentials(),
            Err(ValidationError::Missing("access_key_id"))
        ));
    }

    #[test]
    fn test_should_load_from_env() {
        let config = ClientConfig::from_env();
        assert!(!config.region.is_empty());
    }

    #[test]
    fn test_should_require_secret() {
        let config = ClientConfig::builder()
            .access_key_id(Some("AKID".into()))
            .secret_access_key(Some(String::new()))
            .build();
        assert!(matches!(
            config.credentials(),
            Err(ValidationError::Missing("secret_access_key"))
        ));
    }

    #[test]
    fn test_should_parse_endpoint_override() {
        let config = ClientConfig::builder()
            .endpoint_url(Some("http://localhost:4566".into()))
            .build();
        let endpoint = config.endpoint().unwrap().unwrap();
        assert_eq!(endpoint.authority(), "localhost:4566");

        let bad = ClientConfig::builder()
            .endpoint_url(Some("ftp://localhost".into()))
            .build();
        assert!(bad.endpoint().is_err());
    }

    #[test]
    fn test_should_never_serialize_or_print_secret() {
        let config = ClientConfig::builder()
            .access_key_id(Some("AKID".into()))
            .secret_access_key(Some("topsecret".into()))
            .build();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("accessKeyId"));
        assert!(!json.contains("topsecret"));
        assert!(!format!("{config:?}").contains("topsecret"));
    }
}
