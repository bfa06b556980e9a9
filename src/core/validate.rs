//! Input validation for candidate scan payloads.
//!
//! Pure classification with no side effects: a mismatch is reported
//! before any network call is made, and the caller's scan state is left
//! untouched.

use crate::core::error::ValidationError;
use crate::core::input::MediaFile;
use crate::core::types::ScanKind;

/// Trims a raw URL string and rejects empty input.
pub fn normalize_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    Ok(trimmed.to_string())
}

/// Checks a candidate file against the accepted extension set for `kind`.
///
/// The comparison is case-insensitive. `kind` must be an upload kind;
/// link scans never take a file.
pub fn validate_file(kind: ScanKind, file: &MediaFile) -> Result<(), ValidationError> {
    if !kind.is_upload() {
        return Err(ValidationError::NotAnUploadKind { kind });
    }

    let filename = file.filename().ok_or(ValidationError::MissingFilename)?;
    let extension = extension_of(filename).ok_or_else(|| ValidationError::MissingExtension {
        filename: filename.to_string(),
    })?;

    if kind.accepted_extensions().contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFormat {
            kind,
            extension,
            expected: kind.accepted_extensions(),
        })
    }
}

/// Extracts the lowercase extension of a file name, without the dot.
fn extension_of(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}
