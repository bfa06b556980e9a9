//! The transport seam of the deepguard client.
//!
//! This module defines the `ScanTransport` trait that request transports
//! implement. The orchestrator depends only on this trait, so tests can
//! substitute a scripted transport for the real HTTP one.

use crate::core::error::ScanError;
use crate::core::types::ScanRequest;
use crate::core::verdict::ScanVerdict;

use async_trait::async_trait;
use std::fmt::Debug;

/// A transport that performs one outbound scan request.
///
/// # Implementation Notes
///
/// - Implementations must be `Send + Sync` for use in async contexts.
/// - `send` either resolves with a fully-typed [`ScanVerdict`] or rejects
///   with a classified [`ScanError`]; it never returns partial data.
/// - No timeout is enforced by the trait; cancellation semantics belong
///   to the caller.
/// - Implementations should never panic; all failures are returned as
///   `ScanError`.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use deepguard::core::{ScanError, ScanRequest, ScanTransport, ScanVerdict};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct MyTransport;
///
/// #[async_trait]
/// impl ScanTransport for MyTransport {
///     async fn send(&self, request: &ScanRequest) -> Result<ScanVerdict, ScanError> {
///         // Perform the request...
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait ScanTransport: Send + Sync + Debug {
    /// Sends the given request to the analysis backend.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] classified by the transport:
    /// - `Server` - the backend responded with a non-success status.
    /// - `Network` - the request never reached or returned from the backend.
    /// - `Unknown` - a local failure such as a malformed response body.
    async fn send(&self, request: &ScanRequest) -> Result<ScanVerdict, ScanError>;
}

/// A boxed transport for type-erased storage.
pub type BoxedTransport = Box<dyn ScanTransport>;

/// An arc-wrapped transport for shared ownership.
pub type ArcTransport = std::sync::Arc<dyn ScanTransport>;
