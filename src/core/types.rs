//! Core types used throughout the deepguard client.
//!
//! This module defines the scan kinds, the request payloads, and the
//! `ScanRequest` unit of retry. Requests can only be built through
//! validating constructors, so a `ScanRequest` that exists is a request
//! the transport is allowed to send.

use crate::core::error::ValidationError;
use crate::core::input::MediaFile;
use crate::core::validate;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of media being submitted for analysis.
///
/// The kind determines the backend endpoint, the payload encoding
/// (URL query vs. multipart file upload), and the accepted file
/// extensions for upload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanKind {
    /// A remote URL (YouTube, social media, arbitrary web links).
    Link,
    /// A still image upload.
    Image,
    /// A video upload.
    Video,
    /// An audio upload.
    Audio,
}

impl ScanKind {
    /// Returns the backend endpoint path for this kind.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Link => "/link/scan",
            Self::Image => "/image/scan",
            Self::Video => "/video/scan",
            Self::Audio => "/audio/scan",
        }
    }

    /// Returns the accepted file extensions for this kind, lowercase,
    /// without the leading dot.
    ///
    /// `Link` takes no file and returns an empty set.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Link => &[],
            Self::Image => &["jpg", "jpeg", "png", "webp"],
            Self::Video => &["mp4", "mov", "avi"],
            Self::Audio => &["mp3", "wav", "m4a", "aac", "ogg"],
        }
    }

    /// Returns `true` if this kind carries a file upload rather than a URL.
    pub fn is_upload(&self) -> bool {
        !matches!(self, Self::Link)
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => write!(f, "link"),
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// The payload of a scan request.
///
/// Exactly one variant exists per request, matching the request's kind:
/// `Url` for [`ScanKind::Link`], `File` for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanPayload {
    /// A trimmed, non-empty URL string.
    Url(String),
    /// A media file to upload.
    File(MediaFile),
}

/// One validated scan request, the unit of retry.
///
/// A `ScanRequest` can only be created through [`ScanRequest::link`] or
/// [`ScanRequest::media`], both of which validate their input. Retrying
/// reuses the same request object verbatim with no re-validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    kind: ScanKind,
    payload: ScanPayload,
}

impl ScanRequest {
    /// Creates a link-scan request from a raw URL string.
    ///
    /// The URL is trimmed; empty input is rejected.
    pub fn link(url: impl AsRef<str>) -> Result<Self, ValidationError> {
        let url = validate::normalize_url(url.as_ref())?;
        Ok(Self {
            kind: ScanKind::Link,
            payload: ScanPayload::Url(url),
        })
    }

    /// Creates an upload-scan request for the given kind and file.
    ///
    /// The file's extension must belong to the accepted set for `kind`;
    /// mismatches are rejected before any network activity.
    pub fn media(kind: ScanKind, file: MediaFile) -> Result<Self, ValidationError> {
        validate::validate_file(kind, &file)?;
        Ok(Self {
            kind,
            payload: ScanPayload::File(file),
        })
    }

    /// Returns the kind of this request.
    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    /// Returns the payload of this request.
    pub fn payload(&self) -> &ScanPayload {
        &self.payload
    }

    /// Returns the URL, if this is a link request.
    pub fn url(&self) -> Option<&str> {
        match &self.payload {
            ScanPayload::Url(url) => Some(url),
            ScanPayload::File(_) => None,
        }
    }

    /// Returns the file, if this is an upload request.
    pub fn file(&self) -> Option<&MediaFile> {
        match &self.payload {
            ScanPayload::File(file) => Some(file),
            ScanPayload::Url(_) => None,
        }
    }
}

impl fmt::Display for ScanRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            ScanPayload::Url(url) => write!(f, "{} scan of {}", self.kind, url),
            ScanPayload::File(file) => write!(
                f,
                "{} scan of {}",
                self.kind,
                file.filename().unwrap_or("<unnamed file>")
            ),
        }
    }
}
