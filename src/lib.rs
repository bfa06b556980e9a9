//! # Deepguard
//!
//! A client-side scan engine for the DeepGuard synthetic-media analysis
//! service: submit a remote URL, image, video, or audio input and
//! receive a probability-style verdict.
//!
//! ## Overview
//!
//! The crate owns the awkward parts of talking to the analysis backend
//! so a presentation layer does not have to:
//!
//! - Validate and normalize heterogeneous input (typed URL text vs.
//!   dropped or selected files) before any request is issued
//! - Dispatch each request to the correct backend endpoint with the
//!   correct encoding (URL query vs. multipart upload)
//! - Track the single in-flight scan through an explicit state machine
//! - Distinguish network-reachability failures from server-reported
//!   failures from local ones
//! - Re-issue the last request verbatim on user-triggered retry
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deepguard::{HttpTransport, ScanKind, ScanOrchestrator, MediaFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = ScanOrchestrator::new(HttpTransport::new()?);
//!
//!     // Observe every state transition (Idle -> Loading -> terminal)
//!     let mut states = orchestrator.subscribe();
//!
//!     let outcome = orchestrator
//!         .start_media(ScanKind::Image, MediaFile::from_path("photo.jpg"))
//!         .await?;
//!
//!     if let Some(verdict) = outcome.verdict() {
//!         println!(
//!             "{}: {:.0}%",
//!             verdict.severity().label(),
//!             verdict.effective_probability() * 100.0
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into three layers:
//!
//! - **Core**: Fundamental types, validation, and error handling
//! - **Transport**: The outbound request path and failure classification
//! - **Orchestrator**: The single-scan state machine with retry and
//!   dismissal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod orchestrator;
pub mod transport;

// Re-export commonly used types at the crate root
pub use crate::core::{
    MediaFile, ScanError, ScanKind, ScanPayload, ScanRequest, ScanTransport, ScanVerdict,
    Severity, StartError, ValidationError,
};
pub use crate::orchestrator::{ScanOrchestrator, ScanState};
pub use crate::transport::{HttpTransport, HttpTransportConfig, MockTransport};

/// Prelude module for convenient imports.
///
/// ```rust
/// use deepguard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        MediaFile, ScanError, ScanKind, ScanPayload, ScanRequest, ScanTransport, ScanVerdict,
        Severity, StartError, ValidationError,
    };
    pub use crate::orchestrator::{ScanOrchestrator, ScanState};
    pub use crate::transport::{HttpTransport, HttpTransportConfig, MockTransport};
}
