//! Error types for the deepguard client.
//!
//! This module provides structured, typed errors for all failure scenarios.
//! The library never panics; all errors are returned as `Result` values.
//!
//! The taxonomy separates three concerns:
//!
//! - [`ValidationError`] — bad local input. Never reaches the network and
//!   never enters the scan state machine.
//! - [`ScanError`] — a dispatched scan failed. Produced exclusively by the
//!   transport's error classifier, so callers branch on the variant tag
//!   rather than inspecting causes at runtime.
//! - [`StartError`] — a scan could not be started at all (invalid input,
//!   another scan in flight, or nothing to retry).

use crate::core::types::ScanKind;
use thiserror::Error;

/// Rejection of a candidate input before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The URL was empty after trimming.
    #[error("URL must not be empty")]
    EmptyUrl,

    /// A file was supplied for a kind that takes a URL.
    #[error("{kind} scans take a URL, not a file")]
    NotAnUploadKind {
        /// The offending kind.
        kind: ScanKind,
    },

    /// The file has no usable name.
    #[error("file has no name")]
    MissingFilename,

    /// The file name carries no extension.
    #[error("'{filename}' has no file extension")]
    MissingExtension {
        /// The offending file name.
        filename: String,
    },

    /// The extension does not belong to the accepted set for the kind.
    #[error("unsupported {kind} format '.{extension}': expected one of {}", .expected.join(", "))]
    UnsupportedFormat {
        /// The kind the file was submitted as.
        kind: ScanKind,
        /// The rejected extension, lowercase.
        extension: String,
        /// The accepted extensions for this kind.
        expected: &'static [&'static str],
    },
}

/// Failure of a dispatched scan.
///
/// Exactly one variant applies to every rejection the transport can
/// produce. The `Display` messages are user-facing; the presentation
/// layer uses [`ScanError::is_network_error`] to decide whether to show
/// a connectivity-troubleshooting panel instead of a generic failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The backend responded with a non-success HTTP status.
    #[error("Server error: {status}")]
    Server {
        /// The HTTP status code, always >= 400.
        status: u16,
    },

    /// The request never reached or never returned from the backend.
    #[error("Cannot connect to backend. Please ensure the server is running.")]
    Network {
        /// Underlying transport detail, for logs only.
        detail: String,
    },

    /// A local failure: malformed response body, request construction, file read.
    #[error("{message}")]
    Unknown {
        /// The cause's own message.
        message: String,
    },
}

impl ScanError {
    /// Creates a `Server` error for the given status code.
    pub fn server(status: u16) -> Self {
        Self::Server { status }
    }

    /// Creates a `Network` error with the given transport detail.
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    /// Creates an `Unknown` error, substituting a fixed message when the
    /// cause carried none.
    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Unknown {
            message: if message.is_empty() {
                "Unknown error occurred".to_string()
            } else {
                message
            },
        }
    }

    /// Returns the HTTP status code, if the backend responded with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request never reached the backend
    /// (connection refused, DNS failure, and the like).
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Rejection of an attempt to start or retry a scan.
///
/// None of these variants touch the published scan state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    /// The input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another scan is already in flight; only one scan runs at a time.
    #[error("a scan is already in progress")]
    Busy,

    /// Retry was requested but no scan has ever been dispatched.
    #[error("no previous scan to retry")]
    NoPreviousScan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_and_status() {
        let err = ScanError::server(503);
        assert_eq!(err.to_string(), "Server error: 503");
        assert_eq!(err.status_code(), Some(503));
        assert!(!err.is_network_error());
    }

    #[test]
    fn test_network_error_fixed_message() {
        let err = ScanError::network("connection refused (os error 111)");
        assert_eq!(
            err.to_string(),
            "Cannot connect to backend. Please ensure the server is running."
        );
        assert!(err.is_network_error());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_unknown_error_falls_back_when_empty() {
        assert_eq!(
            ScanError::unknown("").to_string(),
            "Unknown error occurred"
        );
        assert_eq!(
            ScanError::unknown("expected value at line 1").to_string(),
            "expected value at line 1"
        );
        assert!(!ScanError::unknown("x").is_network_error());
        assert_eq!(ScanError::unknown("x").status_code(), None);
    }

    #[test]
    fn test_validation_error_lists_expected_formats() {
        let err = ValidationError::UnsupportedFormat {
            kind: ScanKind::Image,
            extension: "gif".into(),
            expected: ScanKind::Image.accepted_extensions(),
        };
        let message = err.to_string();
        assert!(message.contains("'.gif'"));
        assert!(message.contains("jpg, jpeg, png, webp"));
    }

    #[test]
    fn test_start_error_wraps_validation() {
        let err = StartError::from(ValidationError::EmptyUrl);
        assert_eq!(err.to_string(), "URL must not be empty");
    }
}
