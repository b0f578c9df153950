//! SQS actions.
//!
//! Every action is a `POST` carrying `Action=<name>` plus its own parameters.
//! The query signer adds the authentication parameters and moves them all
//! into the form body.

use awsign_auth::RequestBuilder;
use awsign_core::validation::{validate_at_most, validate_not_empty, validate_queue_name};
use awsign_core::{ClientResult, Operation, Target, ValidationError};
use bytes::Bytes;
use http::Method;

/// Longest visibility timeout SQS accepts, in seconds (12 hours).
pub const MAX_VISIBILITY_TIMEOUT: u32 = 43_200;

/// Longest long-poll wait SQS accepts, in seconds.
pub const MAX_WAIT_TIME_SECONDS: u32 = 20;

/// Most messages a single receive may return.
pub const MAX_NUMBER_OF_MESSAGES: u32 = 10;

const PARAM_ACTION: &str = "Action";
const PARAM_QUEUE_NAME_PREFIX: &str = "QueueNamePrefix";
const PARAM_QUEUE_NAME: &str = "QueueName";
const PARAM_MESSAGE_BODY: &str = "MessageBody";
const PARAM_RECEIPT_HANDLE: &str = "ReceiptHandle";
const PARAM_VISIBILITY_TIMEOUT: &str = "VisibilityTimeout";
const PARAM_WAIT_TIME_SECONDS: &str = "WaitTimeSeconds";
const PARAM_MAX_NUMBER_OF_MESSAGES: &str = "MaxNumberOfMessages";

fn validate_visibility(timeout: u32) -> Result<(), ValidationError> {
    validate_at_most(
        PARAM_VISIBILITY_TIMEOUT,
        timeout.into(),
        MAX_VISIBILITY_TIMEOUT.into(),
    )
}

fn queue(url: &str) -> Target {
    Target::Absolute(url.to_owned())
}

pub(crate) struct ListQueues<'a> {
    pub prefix: Option<&'a str>,
}

impl Operation for ListQueues<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "ListQueues"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        Target::Path("/".to_owned())
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param(PARAM_ACTION, self.name())
            .param_opt(PARAM_QUEUE_NAME_PREFIX, self.prefix)
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct CreateQueue<'a> {
    pub queue_name: &'a str,
    pub default_visibility_timeout: Option<u32>,
}

impl Operation for CreateQueue<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "CreateQueue"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        Target::Path("/".to_owned())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_queue_name(self.queue_name)?;
        self.default_visibility_timeout
            .map_or(Ok(()), validate_visibility)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .param(PARAM_ACTION, self.name())
            .param(PARAM_QUEUE_NAME, self.queue_name);
        match self.default_visibility_timeout {
            Some(timeout) => builder
                .param("Attribute.1.Name", PARAM_VISIBILITY_TIMEOUT)
                .param("Attribute.1.Value", timeout.to_string()),
            None => builder,
        }
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct DeleteQueue<'a> {
    pub queue_url: &'a str,
}

impl Operation for DeleteQueue<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        "DeleteQueue"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        queue(self.queue_url)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("QueueUrl", self.queue_url)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.param(PARAM_ACTION, self.name())
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}

pub(crate) struct SendMessage<'a> {
    pub queue_url: &'a str,
    pub body: &'a str,
}

impl Operation for SendMessage<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "SendMessage"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        queue(self.queue_url)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("QueueUrl", self.queue_url)?;
        validate_not_empty(PARAM_MESSAGE_BODY, self.body)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param(PARAM_ACTION, self.name())
            .param(PARAM_MESSAGE_BODY, self.body)
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct ReceiveMessage<'a> {
    pub queue_url: &'a str,
    pub wait_time_seconds: Option<u32>,
    pub max_number_of_messages: Option<u32>,
}

impl Operation for ReceiveMessage<'_> {
    type Output = Bytes;

    fn name(&self) -> &'static str {
        "ReceiveMessage"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        queue(self.queue_url)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("QueueUrl", self.queue_url)?;
        if let Some(wait) = self.wait_time_seconds {
            validate_at_most(
                PARAM_WAIT_TIME_SECONDS,
                wait.into(),
                MAX_WAIT_TIME_SECONDS.into(),
            )?;
        }
        if let Some(max) = self.max_number_of_messages {
            validate_at_most(
                PARAM_MAX_NUMBER_OF_MESSAGES,
                max.into(),
                MAX_NUMBER_OF_MESSAGES.into(),
            )?;
        }
        Ok(())
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param(PARAM_ACTION, self.name())
            .param_opt(
                PARAM_MAX_NUMBER_OF_MESSAGES,
                self.max_number_of_messages.map(|v| v.to_string()),
            )
            .param_opt(
                PARAM_WAIT_TIME_SECONDS,
                self.wait_time_seconds.map(|v| v.to_string()),
            )
    }

    fn success(&self, response: http::Response<Bytes>) -> ClientResult<Bytes> {
        Ok(response.into_body())
    }
}

pub(crate) struct DeleteMessage<'a> {
    pub queue_url: &'a str,
    pub receipt_handle: &'a str,
}

impl Operation for DeleteMessage<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        "DeleteMessage"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        queue(self.queue_url)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("QueueUrl", self.queue_url)?;
        validate_not_empty(PARAM_RECEIPT_HANDLE, self.receipt_handle)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param(PARAM_ACTION, self.name())
            .param(PARAM_RECEIPT_HANDLE, self.receipt_handle)
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}

pub(crate) struct ChangeMessageVisibility<'a> {
    pub queue_url: &'a str,
    pub receipt_handle: &'a str,
    pub visibility_timeout: u32,
}

impl Operation for ChangeMessageVisibility<'_> {
    type Output = ();

    fn name(&self) -> &'static str {
        "ChangeMessageVisibility"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn target(&self) -> Target {
        queue(self.queue_url)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty("QueueUrl", self.queue_url)?;
        validate_not_empty(PARAM_RECEIPT_HANDLE, self.receipt_handle)?;
        validate_visibility(self.visibility_timeout)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param(PARAM_ACTION, self.name())
            .param(PARAM_RECEIPT_HANDLE, self.receipt_handle)
            .param(PARAM_VISIBILITY_TIMEOUT, self.visibility_timeout.to_string())
    }

    fn success(&self, _response: http::Response<Bytes>) -> ClientResult<()> {
        Ok(())
    }
}
