//! Core types and traits for the deepguard client.
//!
//! This module provides the fundamental building blocks used throughout
//! the library:
//!
//! - [`types`] - Scan kinds, payloads, and the `ScanRequest` unit of retry
//! - [`input`] - The `MediaFile` upload abstraction
//! - [`verdict`] - The backend's typed verdict and severity bucketing
//! - [`validate`] - Pure input validation against accepted-format sets
//! - [`error`] - Structured error types
//! - [`traits`] - The `ScanTransport` trait

pub mod error;
pub mod input;
pub mod traits;
pub mod types;
pub mod validate;
pub mod verdict;

// Re-export commonly used types at the core level
pub use error::{ScanError, StartError, ValidationError};
pub use input::MediaFile;
pub use traits::{ArcTransport, BoxedTransport, ScanTransport};
pub use types::{ScanKind, ScanPayload, ScanRequest};
pub use verdict::{ScanVerdict, Severity};
