//! The observable state of the single active scan.

use crate::core::{ScanError, ScanRequest, ScanVerdict};
use std::sync::Arc;

/// The published lifecycle state of the one active scan.
///
/// Exactly one `ScanState` exists per orchestrator; it moves through
/// `Idle -> Loading -> Succeeded | Failed`, with terminal states
/// superseded only by a new scan, a retry, or an explicit dismissal.
/// The tagged union makes impossible combinations (loading with a
/// verdict, an error alongside a result) unrepresentable.
///
/// Requests are held behind `Arc` so a retry reissues the identical
/// request object.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    /// No scan has run, or the previous outcome was dismissed.
    Idle,

    /// A request is in flight.
    Loading {
        /// The dispatched request.
        request: Arc<ScanRequest>,
    },

    /// The backend returned a verdict.
    Succeeded {
        /// The request that produced the verdict.
        request: Arc<ScanRequest>,
        /// The backend's verdict.
        verdict: ScanVerdict,
    },

    /// The scan failed with a classified error.
    Failed {
        /// The request that failed.
        request: Arc<ScanRequest>,
        /// The classified failure.
        error: ScanError,
    },
}

impl ScanState {
    /// Returns `true` if no scan is active or remembered on screen.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` if a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Returns `true` if the last scan succeeded.
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Returns `true` if the last scan failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns `true` if this is a terminal state (succeeded or failed).
    pub fn is_terminal(&self) -> bool {
        self.is_succeeded() || self.is_failed()
    }

    /// Returns the request associated with this state, if any.
    pub fn request(&self) -> Option<&Arc<ScanRequest>> {
        match self {
            Self::Idle => None,
            Self::Loading { request }
            | Self::Succeeded { request, .. }
            | Self::Failed { request, .. } => Some(request),
        }
    }

    /// Returns the verdict, if the last scan succeeded.
    pub fn verdict(&self) -> Option<&ScanVerdict> {
        match self {
            Self::Succeeded { verdict, .. } => Some(verdict),
            _ => None,
        }
    }

    /// Returns the error, if the last scan failed.
    pub fn error(&self) -> Option<&ScanError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MediaFile, ScanKind};

    fn request() -> Arc<ScanRequest> {
        Arc::new(
            ScanRequest::media(
                ScanKind::Audio,
                MediaFile::from_bytes(vec![0u8]).with_filename("voice.wav"),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_state_predicates() {
        assert!(ScanState::Idle.is_idle());
        assert!(!ScanState::Idle.is_terminal());

        let loading = ScanState::Loading { request: request() };
        assert!(loading.is_loading());
        assert!(!loading.is_terminal());
        assert!(loading.request().is_some());
        assert!(loading.verdict().is_none());
        assert!(loading.error().is_none());
    }

    #[test]
    fn test_terminal_accessors() {
        let succeeded = ScanState::Succeeded {
            request: request(),
            verdict: ScanVerdict::with_status("ok"),
        };
        assert!(succeeded.is_terminal());
        assert_eq!(succeeded.verdict().unwrap().status, "ok");

        let failed = ScanState::Failed {
            request: request(),
            error: ScanError::server(502),
        };
        assert!(failed.is_terminal());
        assert_eq!(failed.error().unwrap().status_code(), Some(502));
    }
}
