//! Timestamp formats used by the signing schemes.

use chrono::{DateTime, Utc};

/// RFC 1123 date as sent in the `Date` header.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// ISO-8601 timestamp as sent in the query API `Timestamp` parameter.
const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format `now` for the `Date` header.
///
/// ```
/// use awsign_auth::time::http_date;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2013, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(http_date(now), "Tue, 01 Jan 2013 00:00:00 GMT");
/// ```
#[must_use]
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format(HTTP_DATE_FORMAT).to_string()
}

/// Format `now` for the `Timestamp` parameter.
#[must_use]
pub fn iso8601(now: DateTime<Utc>) -> String {
    now.format(ISO8601_FORMAT).to_string()
}
