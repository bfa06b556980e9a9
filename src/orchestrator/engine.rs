//! The scan orchestrator.

use crate::core::{
    ArcTransport, MediaFile, ScanKind, ScanRequest, ScanTransport, StartError,
};
use crate::orchestrator::state::ScanState;

use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use uuid::Uuid;

/// Mutable orchestrator internals.
///
/// All state transitions happen while this lock is held (never across an
/// await point), which makes the single-flight check-and-dispatch atomic.
#[derive(Debug)]
struct Inner {
    /// Monotonically increasing tag for dispatched requests. A resolution
    /// whose generation no longer matches is stale and is discarded.
    generation: u64,
    /// The last dispatched request, remembered for retry. Survives
    /// dismissal until a new scan replaces it.
    last_request: Option<Arc<ScanRequest>>,
}

/// Owns the single active scan's lifecycle.
///
/// The orchestrator validates nothing itself: it accepts only
/// already-validated [`ScanRequest`] values (or builds them through the
/// validating convenience entry points), dispatches them over the
/// configured transport, and publishes every state transition on a
/// watch channel for the presentation layer to observe.
///
/// Exactly one scan may be in flight at a time; starting or retrying
/// while one is loading is rejected with [`StartError::Busy`].
///
/// # Example
///
/// ```rust,ignore
/// use deepguard::orchestrator::ScanOrchestrator;
/// use deepguard::transport::HttpTransport;
///
/// let orchestrator = ScanOrchestrator::new(HttpTransport::new()?);
/// let mut states = orchestrator.subscribe();
///
/// let outcome = orchestrator.start_link("https://example.com/video").await?;
/// if let Some(verdict) = outcome.verdict() {
///     println!("{}", verdict.severity().label());
/// }
/// ```
pub struct ScanOrchestrator {
    transport: ArcTransport,
    state_tx: watch::Sender<ScanState>,
    inner: Mutex<Inner>,
}

impl ScanOrchestrator {
    /// Creates an orchestrator over the given transport.
    pub fn new<T: ScanTransport + 'static>(transport: T) -> Self {
        Self::with_transport(Arc::new(transport))
    }

    /// Creates an orchestrator over a shared transport.
    pub fn with_transport(transport: ArcTransport) -> Self {
        let (state_tx, _) = watch::channel(ScanState::Idle);
        Self {
            transport,
            state_tx,
            inner: Mutex::new(Inner {
                generation: 0,
                last_request: None,
            }),
        }
    }

    /// Returns a read-only subscription to the published scan state.
    pub fn subscribe(&self) -> watch::Receiver<ScanState> {
        self.state_tx.subscribe()
    }

    /// Returns a snapshot of the current scan state.
    pub fn state(&self) -> ScanState {
        self.state_tx.borrow().clone()
    }

    /// Validates a URL and starts a link scan.
    pub async fn start_link(&self, url: &str) -> Result<ScanState, StartError> {
        let request = ScanRequest::link(url)?;
        self.start_scan(request).await
    }

    /// Validates a file against `kind` and starts an upload scan.
    ///
    /// Validation failures are surfaced immediately; no request is
    /// issued and the published state is left unchanged.
    pub async fn start_media(
        &self,
        kind: ScanKind,
        file: MediaFile,
    ) -> Result<ScanState, StartError> {
        let request = ScanRequest::media(kind, file)?;
        self.start_scan(request).await
    }

    /// Starts a scan for an already-validated request.
    ///
    /// Transitions to `Loading`, remembers the request for retry, and
    /// resolves with the terminal state the transport produced. While a
    /// scan is loading, further starts are rejected with
    /// [`StartError::Busy`].
    pub async fn start_scan(&self, request: ScanRequest) -> Result<ScanState, StartError> {
        self.dispatch(Arc::new(request)).await
    }

    /// Re-issues the last dispatched request verbatim.
    ///
    /// No re-validation happens; the remembered request object is reused
    /// as-is, so the reissued bytes are identical. Errors with
    /// [`StartError::NoPreviousScan`] if nothing was ever dispatched.
    pub async fn retry_last(&self) -> Result<ScanState, StartError> {
        let request = self
            .inner
            .lock()
            .expect("orchestrator state lock poisoned")
            .last_request
            .clone()
            .ok_or(StartError::NoPreviousScan)?;

        tracing::debug!(request = %request, "retrying last scan");
        self.dispatch(request).await
    }

    /// Dismisses the current outcome and returns to `Idle`.
    ///
    /// The last request is retained, so a later [`retry_last`] still
    /// works until a new scan replaces it. Dismissing while a scan is
    /// loading abandons the in-flight request: its resolution is
    /// discarded when it eventually arrives.
    ///
    /// [`retry_last`]: Self::retry_last
    pub fn dismiss(&self) {
        let mut inner = self.inner.lock().expect("orchestrator state lock poisoned");
        if self.state_tx.borrow().is_loading() {
            inner.generation += 1;
            tracing::debug!("dismissed while loading; in-flight resolution will be discarded");
        }
        self.state_tx.send_replace(ScanState::Idle);
    }

    async fn dispatch(&self, request: Arc<ScanRequest>) -> Result<ScanState, StartError> {
        let scan_id = Uuid::new_v4();

        let generation = {
            let mut inner = self.inner.lock().expect("orchestrator state lock poisoned");
            if self.state_tx.borrow().is_loading() {
                return Err(StartError::Busy);
            }
            inner.generation += 1;
            inner.last_request = Some(Arc::clone(&request));
            self.state_tx.send_replace(ScanState::Loading {
                request: Arc::clone(&request),
            });
            inner.generation
        };

        tracing::info!(
            scan_id = %scan_id,
            kind = %request.kind(),
            request = %request,
            "dispatching scan"
        );

        let outcome = self.transport.send(&request).await;

        let inner = self.inner.lock().expect("orchestrator state lock poisoned");
        if inner.generation != generation {
            tracing::debug!(scan_id = %scan_id, "discarding stale scan resolution");
            return Ok(self.state());
        }

        let next = match outcome {
            Ok(verdict) => {
                tracing::info!(
                    scan_id = %scan_id,
                    status = %verdict.status,
                    probability = verdict.effective_probability(),
                    severity = %verdict.severity(),
                    "scan succeeded"
                );
                ScanState::Succeeded { request, verdict }
            }
            Err(error) => {
                tracing::warn!(
                    scan_id = %scan_id,
                    error = %error,
                    network = error.is_network_error(),
                    status = error.status_code(),
                    "scan failed"
                );
                ScanState::Failed { request, error }
            }
        };

        self.state_tx.send_replace(next.clone());
        Ok(next)
    }
}

impl std::fmt::Debug for ScanOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanOrchestrator")
            .field("state", &*self.state_tx.borrow())
            .finish_non_exhaustive()
    }
}
