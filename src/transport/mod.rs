//! Request transport implementations.
//!
//! This module contains implementations of the [`ScanTransport`] trait
//! along with the error classifier every transport failure passes
//! through:
//!
//! - [`http`] - The reqwest-backed transport for the real backend
//! - [`classify`] - Deterministic failure classification
//! - [`mock`] - A scripted transport for tests
//!
//! ## Implementing a Custom Transport
//!
//! To route scans somewhere else (a recorded fixture store, a unix
//! socket sidecar), implement the trait:
//!
//! ```rust,ignore
//! use deepguard::core::{ScanError, ScanRequest, ScanTransport, ScanVerdict};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! pub struct MyTransport {
//!     // Your transport's configuration
//! }
//!
//! #[async_trait]
//! impl ScanTransport for MyTransport {
//!     async fn send(&self, request: &ScanRequest) -> Result<ScanVerdict, ScanError> {
//!         // Dispatch the request
//!         todo!()
//!     }
//! }
//! ```

pub mod classify;
pub mod http;
pub mod mock;

pub use crate::core::traits::ScanTransport;
pub use http::{HttpTransport, HttpTransportConfig, DEFAULT_BASE_URL};
pub use mock::MockTransport;
