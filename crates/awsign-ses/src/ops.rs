//! SES actions. All are `POST /` with the parameters as the form body.

use awsign_auth::RequestBuilder;
use awsign_core::validation::validate_email_address;
use awsign_core::{ClientResult, Operation, Target, ValidationError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use http::Method;

use crate::message::{Content, Destination, Message};

const PARAM_ACTION: &str = "Action";
const PARAM_EMAIL_ADDRESS: &str = "EmailAddress";
const PARAM_SOURCE: &str = "Source";
const PARAM_RETURN_PATH: &str = "ReturnPath";
const PARAM_RAW_MESSAGE_DATA: &str = "RawMessage.Data";

const MEMBER_DESTINATIONS: &str = "Destinations.member";
const MEMBER_TO: &str = "Destination.ToAddresses.member";
const MEMBER_CC: &str = "Destination.CcAddresses.member";
const MEMBER_BCC: &str = "Destination.BccAddresses.member";
const MEMBER_REPLY_TO: &str = "ReplyToAddresses.member";

/// Add `<prefix>.1`, `<prefix>.2`, ... for `values`.
fn members<S: AsRef<str>>(mut builder: RequestBuilder, prefix: &str, values: &[S]) -> RequestBuilder {
    for (i, value) in values.iter().enumerate() {
        builder = builder.param(format!("{prefix}.{}", i + 1), value.as_ref());
    }
    builder
}

fn content(builder: RequestBuilder, prefix: &str, content: Option<&Content>) -> RequestBuilder {
    match content {
        Some(content) => builder
            .param(format!("{prefix}.Data"), content.data.as_str())
            .param_opt(format!("{prefix}.Charset"), content.charset.as_deref()),
        None => builder,
    }
}

fn root() -> Target {
    Target::Path("/".to_owned())
}

/// An action that takes no parameters besides its name.
pub(crate) struct Action(pub &'static str);

impl Operation for Action {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        self.0
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        root()
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.param(PARAM_ACTION, self.0)
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

/// An action on a single email address.
pub(crate) struct AddressAction<'a> {
    pub action: &'static str,
    pub address: &'a str,
}

impl Operation for AddressAction<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        self.action
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        root()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_email_address(self.address)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param(PARAM_ACTION, self.action)
            .param(PARAM_EMAIL_ADDRESS, self.address)
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}

pub(crate) struct SendEmail<'a> {
    pub destination: &'a Destination,
    pub message: &'a Message,
    pub reply_to: &'a [&'a str],
    pub return_path: Option<&'a str>,
    pub from: &'a str,
}

impl Operation for SendEmail<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "SendEmail"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        root()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_email_address(self.from)?;
        if self.destination.is_empty() {
            return Err(ValidationError::Missing("Destination"));
        }
        Ok(())
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let mut builder = builder
            .param(PARAM_ACTION, self.name())
            .param(PARAM_SOURCE, self.from);
        builder = members(builder, MEMBER_TO, &self.destination.to);
        builder = members(builder, MEMBER_CC, &self.destination.cc);
        builder = members(builder, MEMBER_BCC, &self.destination.bcc);
        builder = content(builder, "Message.Subject", self.message.subject.as_ref());
        builder = content(builder, "Message.Body.Text", self.message.body.text.as_ref());
        builder = content(builder, "Message.Body.Html", self.message.body.html.as_ref());
        builder = members(builder, MEMBER_REPLY_TO, self.reply_to);
        builder.param_opt(PARAM_RETURN_PATH, self.return_path)
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct SendRawEmail<'a> {
    pub data: &'a [u8],
    pub from: &'a str,
    pub destinations: &'a [&'a str],
}

impl Operation for SendRawEmail<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "SendRawEmail"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        root()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_email_address(self.from)?;
        if self.data.is_empty() {
            return Err(ValidationError::Missing(PARAM_RAW_MESSAGE_DATA));
        }
        Ok(())
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .param(PARAM_ACTION, self.name())
            .param(PARAM_SOURCE, self.from);
        members(builder, MEMBER_DESTINATIONS, self.destinations)
            .param(PARAM_RAW_MESSAGE_DATA, BASE64.encode(self.data))
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}
