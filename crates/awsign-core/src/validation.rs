//! Identifier and bounds checks run before a request is prepared.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// 3 to 255 characters of lowercase alphanumerics, `.`, `_` and `-`, with an
/// alphanumeric at both ends.
static BUCKET_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9_.\-]{1,253}[a-z0-9]$").expect("valid bucket name pattern")
});

/// 1 to 80 characters of alphanumerics, `_` and `-`.
static QUEUE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]{1,80}$").expect("valid queue name pattern"));

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[_A-Za-z0-9\-]+(\.[_A-Za-z0-9\-]+)*@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*(\.[A-Za-z]{2,4})$",
    )
    .expect("valid email address pattern")
});

/// Validate an S3 bucket name.
///
/// # Examples
///
/// ```
/// use awsign_core::validation::validate_bucket_name;
///
/// assert!(validate_bucket_name("my-bucket.01").is_ok());
/// assert!(validate_bucket_name("MY_BUCKET").is_err());
/// ```
pub fn validate_bucket_name(name: &str) -> Result<(), ValidationError> {
    if BUCKET_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidBucketName(name.to_owned()))
    }
}

/// Validate an SQS queue name.
pub fn validate_queue_name(name: &str) -> Result<(), ValidationError> {
    if QUEUE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidQueueName(name.to_owned()))
    }
}

/// Validate an email address.
pub fn validate_email_address(address: &str) -> Result<(), ValidationError> {
    if EMAIL_ADDRESS.is_match(address) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmailAddress(address.to_owned()))
    }
}

/// Reject `value` if it exceeds `max`.
pub fn validate_at_most(name: &'static str, value: u64, max: u64) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::OutOfRange { name, value, max });
    }
    Ok(())
}

/// Reject an empty string.
pub fn validate_not_empty(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Missing(name));
    }
    Ok(())
}
