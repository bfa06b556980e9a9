//! Error classification for transport failures.
//!
//! Every rejection the HTTP transport can produce passes through exactly
//! one of the mappings here, so the presentation layer can branch on the
//! resulting [`ScanError`] tag instead of inspecting causes at runtime:
//!
//! - non-success HTTP status -> `Server { status }`
//! - connection-shaped transport exception -> `Network`
//! - anything else (malformed body, request construction) -> `Unknown`

use crate::core::error::ScanError;
use reqwest::StatusCode;

/// Maps a non-success HTTP status to a `Server` error.
pub fn status_error(status: StatusCode) -> ScanError {
    ScanError::server(status.as_u16())
}

/// Classifies a transport-level failure from the HTTP client.
///
/// Connection failures (refused, DNS, timed out) become `Network`
/// regardless of anything else; there is no status code because the
/// server never responded. Body-decoding failures and other local causes
/// become `Unknown` carrying the cause's own message.
pub fn classify(err: reqwest::Error) -> ScanError {
    if err.is_connect() || err.is_timeout() {
        ScanError::network(err.to_string())
    } else if err.is_decode() {
        ScanError::unknown(format!("malformed response: {err}"))
    } else {
        ScanError::unknown(err.to_string())
    }
}
