//! The SES client.

use std::sync::Arc;

use awsign_auth::{Credentials, RequestSigner};
use awsign_core::{ClientConfig, ClientResult, Endpoint, HttpTransport, ServiceClient, SesRegion};
use bytes::Bytes;
use tracing::debug;

use crate::message::{Destination, Message};
use crate::ops::{Action, AddressAction, SendEmail, SendRawEmail};

/// SES client signing with the AWS3-HTTPS date scheme, HMAC-SHA256 unless
/// built through [`SesClient::with_signer`].
///
/// Response bodies are returned unparsed.
#[derive(Debug, Clone)]
pub struct SesClient {
    inner: ServiceClient,
}

impl SesClient {
    /// Create a client for `region`'s public endpoint.
    #[must_use]
    pub fn new(
        credentials: Arc<Credentials>,
        region: SesRegion,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::with_endpoint(credentials, Endpoint::from(region), transport)
    }

    /// Create a client sending to `endpoint`.
    #[must_use]
    pub fn with_endpoint(
        credentials: Arc<Credentials>,
        endpoint: Endpoint,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::with_signer(RequestSigner::aws3(credentials), endpoint, transport)
    }

    /// Create a client with a custom signer, such as an AWS3-HTTPS signer
    /// using HMAC-SHA1 for endpoints that still expect it.
    #[must_use]
    pub fn with_signer(
        signer: RequestSigner,
        endpoint: Endpoint,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            inner: ServiceClient::new(signer, endpoint, transport),
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &ClientConfig, transport: Arc<dyn HttpTransport>) -> ClientResult<Self> {
        let credentials = config.credentials()?;
        let endpoint = match config.endpoint()? {
            Some(endpoint) => endpoint,
            None => Endpoint::from(config.region.parse::<SesRegion>()?),
        };
        debug!(%endpoint, "Creating SES client");
        Ok(Self::with_endpoint(credentials, endpoint, transport))
    }

    /// The underlying pipeline.
    #[must_use]
    pub fn service(&self) -> &ServiceClient {
        &self.inner
    }

    /// Ask SES to send a verification mail to `address`.
    pub async fn verify_email_address(&self, address: &str) -> ClientResult<()> {
        self.inner
            .execute(&AddressAction {
                action: "VerifyEmailAddress",
                address,
            })
            .await
    }

    /// Remove `address` from the verified senders.
    pub async fn delete_verified_email_address(&self, address: &str) -> ClientResult<()> {
        self.inner
            .execute(&AddressAction {
                action: "DeleteVerifiedEmailAddress",
                address,
            })
            .await
    }

    /// List verified sender addresses.
    pub async fn list_verified_email_addresses(&self) -> ClientResult<Bytes> {
        self.inner.execute(&Action("ListVerifiedEmailAddresses")).await
    }

    /// Fetch the sending limits of the account.
    pub async fn get_send_quota(&self) -> ClientResult<Bytes> {
        self.inner.execute(&Action("GetSendQuota")).await
    }

    /// Fetch the sending statistics of the last two weeks.
    pub async fn get_send_statistics(&self) -> ClientResult<Bytes> {
        self.inner.execute(&Action("GetSendStatistics")).await
    }

    /// Send a formatted message.
    pub async fn send_email(
        &self,
        destination: &Destination,
        message: &Message,
        reply_to: &[&str],
        return_path: Option<&str>,
        from: &str,
    ) -> ClientResult<Bytes> {
        self.inner
            .execute(&SendEmail {
                destination,
                message,
                reply_to,
                return_path,
                from,
            })
            .await
    }

    /// Send a UTF-8 plain text message to a single recipient.
    pub async fn send_text_email(
        &self,
        from: &str,
        to: &str,
        return_path: Option<&str>,
        subject: &str,
        body: &str,
    ) -> ClientResult<Bytes> {
        let destination = Destination::to(to);
        let message = Message::text(subject, body);
        self.send_email(&destination, &message, &[], return_path, from)
            .await
    }

    /// Send a complete MIME message. `destinations` overrides the recipients
    /// found in its headers when not empty.
    pub async fn send_raw_email(
        &self,
        data: &[u8],
        from: &str,
        destinations: &[&str],
    ) -> ClientResult<Bytes> {
        self.inner
            .execute(&SendRawEmail {
                data,
                from,
                destinations,
            })
            .await
    }
}
