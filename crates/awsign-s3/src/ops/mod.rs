//! S3 operations.
//!
//! Each operation is a small struct implementing
//! [`awsign_core::Operation`], grouped by what it acts on.

pub mod bucket;
pub mod object;
