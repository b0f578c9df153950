//! Region to endpoint lookup.
//!
//! Each service has a closed set of regions with a fixed hostname. S3 regions
//! also carry the `LocationConstraint` used when creating a bucket outside
//! the default region.

use std::fmt;
use std::str::FromStr;

use http::uri::{Authority, Scheme};

use crate::error::ValidationError;

/// S3 regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum S3Region {
    /// US Standard (`us-east-1`).
    #[default]
    UsEast,
    /// US West, Oregon.
    UsWestOregon,
    /// US West, Northern California.
    UsWestNorCal,
    /// EU, Ireland.
    Eu,
    /// Asia Pacific, Singapore.
    AsiaSingapore,
    /// Asia Pacific, Sydney.
    AsiaSydney,
    /// Asia Pacific, Tokyo.
    AsiaTokyo,
    /// South America, São Paulo.
    SouthAmerica,
}

impl S3Region {
    /// Every S3 region.
    pub const ALL: [Self; 8] = [
        Self::UsEast,
        Self::UsWestOregon,
        Self::UsWestNorCal,
        Self::Eu,
        Self::AsiaSingapore,
        Self::AsiaSydney,
        Self::AsiaTokyo,
        Self::SouthAmerica,
    ];

    /// The region identifier, e.g. `us-west-2`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::UsEast => "us-east-1",
            Self::UsWestOregon => "us-west-2",
            Self::UsWestNorCal => "us-west-1",
            Self::Eu => "eu-west-1",
            Self::AsiaSingapore => "ap-southeast-1",
            Self::AsiaSydney => "ap-southeast-2",
            Self::AsiaTokyo => "ap-northeast-1",
            Self::SouthAmerica => "sa-east-1",
        }
    }

    /// The service hostname.
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::UsEast => "s3.amazonaws.com",
            Self::UsWestOregon => "s3-us-west-2.amazonaws.com",
            Self::UsWestNorCal => "s3-us-west-1.amazonaws.com",
            Self::Eu => "s3-eu-west-1.amazonaws.com",
            Self::AsiaSingapore => "s3-ap-southeast-1.amazonaws.com",
            Self::AsiaSydney => "s3-ap-southeast-2.amazonaws.com",
            Self::AsiaTokyo => "s3-ap-northeast-1.amazonaws.com",
            Self::SouthAmerica => "s3-sa-east-1.amazonaws.com",
        }
    }

    /// The `LocationConstraint` for bucket creation, `None` for US Standard.
    #[must_use]
    pub fn location_constraint(self) -> Option<&'static str> {
        match self {
            Self::UsEast => None,
            Self::Eu => Some("EU"),
            other => Some(other.id()),
        }
    }
}

/// SQS regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SqsRegion {
    /// The legacy global endpoint.
    #[default]
    Default,
    /// US East, Northern Virginia.
    UsEast,
    /// US West, Oregon.
    UsWestOregon,
    /// US West, Northern California.
    UsWestNorCal,
    /// EU, Ireland.
    Eu,
    /// Asia Pacific, Singapore.
    AsiaSingapore,
    /// Asia Pacific, Sydney.
    AsiaSydney,
    /// Asia Pacific, Tokyo.
    AsiaTokyo,
    /// South America, São Paulo.
    SouthAmerica,
}

impl SqsRegion {
    /// Every SQS region.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::UsEast,
        Self::UsWestOregon,
        Self::UsWestNorCal,
        Self::Eu,
        Self::AsiaSingapore,
        Self::AsiaSydney,
        Self::AsiaTokyo,
        Self::SouthAmerica,
    ];

    /// The region identifier. The global endpoint has none.
    #[must_use]
    pub fn id(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::UsEast => Some("us-east-1"),
            Self::UsWestOregon => Some("us-west-2"),
            Self::UsWestNorCal => Some("us-west-1"),
            Self::Eu => Some("eu-west-1"),
            Self::AsiaSingapore => Some("ap-southeast-1"),
            Self::AsiaSydney => Some("ap-southeast-2"),
            Self::AsiaTokyo => Some("ap-northeast-1"),
            Self::SouthAmerica => Some("sa-east-1"),
        }
    }

    /// The service hostname.
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::Default => "queue.amazonaws.com",
            Self::UsEast => "sqs.us-east-1.amazonaws.com",
            Self::UsWestOregon => "sqs.us-west-2.amazonaws.com",
            Self::UsWestNorCal => "sqs.us-west-1.amazonaws.com",
            Self::Eu => "sqs.eu-west-1.amazonaws.com",
            Self::AsiaSingapore => "sqs.ap-southeast-1.amazonaws.com",
            Self::AsiaSydney => "sqs.ap-southeast-2.amazonaws.com",
            Self::AsiaTokyo => "sqs.ap-northeast-1.amazonaws.com",
            Self::SouthAmerica => "sqs.sa-east-1.amazonaws.com",
        }
    }
}

/// SES regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SesRegion {
    /// US East, Northern Virginia.
    #[default]
    UsEast,
    /// US West, Oregon.
    UsWestOregon,
    /// EU, Ireland.
    Eu,
}

impl SesRegion {
    /// Every SES region.
    pub const ALL: [Self; 3] = [Self::UsEast, Self::UsWestOregon, Self::Eu];

    /// The region identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::UsEast => "us-east-1",
            Self::UsWestOregon => "us-west-2",
            Self::Eu => "eu-west-1",
        }
    }

    /// The service hostname.
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::UsEast => "email.us-east-1.amazonaws.com",
            Self::UsWestOregon => "email.us-west-2.amazonaws.com",
            Self::Eu => "email.eu-west-1.amazonaws.com",
        }
    }
}

impl FromStr for S3Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.id() == s)
            .ok_or_else(|| ValidationError::InvalidEndpoint(s.to_owned()))
    }
}

impl FromStr for SqsRegion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.id() == Some(s))
            .ok_or_else(|| ValidationError::InvalidEndpoint(s.to_owned()))
    }
}

impl FromStr for SesRegion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.id() == s)
            .ok_or_else(|| ValidationError::InvalidEndpoint(s.to_owned()))
    }
}

/// Scheme and authority requests are sent to.
///
/// # Examples
///
/// ```
/// use awsign_core::Endpoint;
///
/// let endpoint = Endpoint::parse("s3.amazonaws.com").unwrap();
/// assert_eq!(endpoint.url(Some("my-bucket"), "/a.txt"), "https://my-bucket.s3.amazonaws.com/a.txt");
///
/// let local = Endpoint::parse("http://localhost:4566").unwrap();
/// assert_eq!(local.url(None, "/"), "http://localhost:4566/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    authority: Authority,
}

impl Endpoint {
    /// Parse a bare host (HTTPS implied) or an `http(s)://host[:port]` URL.
    ///
    /// A trailing `/` is tolerated; any other path, query or credentials are
    /// rejected.
    pub fn parse(endpoint: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidEndpoint(endpoint.to_owned());

        let (scheme, rest) = match endpoint.split_once("://") {
            Some(("https", rest)) => (Scheme::HTTPS, rest),
            Some(("http", rest)) => (Scheme::HTTP, rest),
            Some(_) => return Err(invalid()),
            None => (Scheme::HTTPS, endpoint),
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() || rest.contains(['/', '?', '#', '@']) {
            return Err(invalid());
        }
        let authority = Authority::try_from(rest).map_err(|_| invalid())?;

        Ok(Self { scheme, authority })
    }

    /// The URI scheme, `https` or `http`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// `host[:port]`.
    #[must_use]
    pub fn authority(&self) -> &str {
        self.authority.as_str()
    }

    /// The hostname without port.
    #[must_use]
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// Compose `scheme://[resource.]authority<path>`. `path` must start with
    /// `/`.
    #[must_use]
    pub fn url(&self, resource: Option<&str>, path: &str) -> String {
        match resource {
            Some(resource) => format!("{}://{resource}.{}{path}", self.scheme, self.authority),
            None => format!("{}://{}{path}", self.scheme, self.authority),
        }
    }
}

impl From<S3Region> for Endpoint {
    fn from(region: S3Region) -> Self {
        Self::https(region.host())
    }
}

impl From<SqsRegion> for Endpoint {
    fn from(region: SqsRegion) -> Self {
        Self::https(region.host())
    }
}

impl From<SesRegion> for Endpoint {
    fn from(region: SesRegion) -> Self {
        Self::https(region.host())
    }
}

impl Endpoint {
    fn https(host: &'static str) -> Self {
        Self {
            scheme: Scheme::HTTPS,
            authority: Authority::from_static(host),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}
