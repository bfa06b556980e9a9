//! Media file abstraction for flexible upload handling.
//!
//! This module provides `MediaFile`, which lets callers hand the client
//! either a path on disk or an in-memory buffer (a dropped or selected
//! file whose bytes the host application already holds). Path contents
//! are read lazily by the transport at send time.

use std::path::{Path, PathBuf};

/// A media file to be uploaded for analysis, as a path or as bytes.
///
/// # Examples
///
/// ```rust
/// use deepguard::core::MediaFile;
///
/// // From a file on disk
/// let file = MediaFile::from_path("/tmp/interview_clip.mp4");
///
/// // From bytes the application already holds
/// let file = MediaFile::from_bytes(vec![0xFF, 0xD8]).with_filename("photo.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaFile {
    /// A file path on disk. The name is derived from the path.
    Path(PathBuf),

    /// In-memory bytes with an optional original filename.
    Bytes {
        /// The file data.
        data: Vec<u8>,
        /// Original filename, if known.
        filename: Option<String>,
    },
}

impl MediaFile {
    /// Creates a `MediaFile` from a file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Creates a `MediaFile` from in-memory bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::Bytes {
            data: data.into(),
            filename: None,
        }
    }

    /// Sets the filename for bytes inputs.
    ///
    /// For path inputs the name is derived from the path and this is a no-op.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        if let Self::Bytes { filename: f, .. } = &mut self {
            *f = Some(filename.into());
        }
        self
    }

    /// Returns the filename, if known.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Self::Path(path) => path.file_name().and_then(|n| n.to_str()),
            Self::Bytes { filename, .. } => filename.as_deref(),
        }
    }

    /// Returns the size in bytes, if known without touching the filesystem.
    pub fn size_hint(&self) -> Option<u64> {
        match self {
            Self::Path(_) => None,
            Self::Bytes { data, .. } => Some(data.len() as u64),
        }
    }

    /// Returns the path, if this is a path-based input.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Bytes { .. } => None,
        }
    }

    /// Returns the bytes, if this is a bytes-based input.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes { data, .. } => Some(data),
            Self::Path(_) => None,
        }
    }

    /// Reads the full file contents.
    ///
    /// For path inputs this performs an async filesystem read; for bytes
    /// inputs it clones the buffer.
    pub async fn contents(&self) -> std::io::Result<Vec<u8>> {
        match self {
            Self::Path(path) => tokio::fs::read(path).await,
            Self::Bytes { data, .. } => Ok(data.clone()),
        }
    }
}

impl From<PathBuf> for MediaFile {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for MediaFile {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for MediaFile {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for MediaFile {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data.to_vec())
    }
}
