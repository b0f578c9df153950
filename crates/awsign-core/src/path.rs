//! Object key paths.
//!
//! A key is handled as a list of segments. [`join_path`] percent-encodes each
//! non-empty segment on its own and joins them with `/`, so a `/` inside a
//! segment survives as `%2F`. [`split_path`] reverses it.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters is encoded.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode and join path segments, skipping empty ones.
///
/// # Examples
///
/// ```
/// use awsign_core::path::join_path;
///
/// assert_eq!(join_path(&["accounts", "", "silly/path+dog"]), "accounts/silly%2Fpath%2Bdog");
/// ```
#[must_use]
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|segment| !segment.is_empty())
        .map(|segment| utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a path on `/` and decode each non-empty segment.
///
/// Invalid UTF-8 after decoding is replaced lossily.
#[must_use]
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

/// Append `key` as the last segment of `prefix`.
#[must_use]
pub fn append_key<S: AsRef<str>>(key: &str, prefix: &[S]) -> Vec<String> {
    prefix
        .iter()
        .map(|segment| segment.as_ref().to_owned())
        .chain(std::iter::once(key.to_owned()))
        .collect()
}
