//! Mock transport for testing.
//!
//! This module provides a configurable scripted transport that simulates
//! backend behavior without network access. Responses can be queued per
//! call; when the queue is empty the default verdict is returned.

use crate::core::{ScanError, ScanRequest, ScanTransport, ScanVerdict};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// A scripted transport for tests.
///
/// # Examples
///
/// ```rust
/// use deepguard::transport::MockTransport;
/// use deepguard::core::{ScanError, ScanVerdict};
///
/// // Always resolves with the default "ok" verdict
/// let transport = MockTransport::new();
///
/// // Fails the first call, succeeds afterwards
/// let transport = MockTransport::new()
///     .with_response(Err(ScanError::network("connection refused")));
///
/// // Resolves with a specific verdict
/// let mut verdict = ScanVerdict::with_status("ok");
/// verdict.deepfake_probability = Some(0.82);
/// let transport = MockTransport::new().with_verdict(verdict);
/// ```
#[derive(Debug)]
pub struct MockTransport {
    /// Scripted responses consumed front-to-back, one per `send` call.
    responses: Mutex<VecDeque<Result<ScanVerdict, ScanError>>>,
    /// Returned once the script is exhausted.
    default_verdict: ScanVerdict,
    /// Simulated latency per call.
    latency: Option<Duration>,
    /// Number of `send` calls observed.
    send_count: AtomicU64,
    /// Every request seen, in order, for idempotence assertions.
    seen: Mutex<Vec<ScanRequest>>,
}

impl MockTransport {
    /// Creates a mock that resolves every call with an `"ok"` verdict.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            default_verdict: ScanVerdict::with_status("ok"),
            latency: None,
            send_count: AtomicU64::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Sets the verdict returned when the scripted queue is empty.
    pub fn with_verdict(mut self, verdict: ScanVerdict) -> Self {
        self.default_verdict = verdict;
        self
    }

    /// Queues one scripted response.
    pub fn with_response(self, response: Result<ScanVerdict, ScanError>) -> Self {
        self.push_response(response);
        self
    }

    /// Sets a simulated latency per call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Queues one scripted response after construction.
    pub fn push_response(&self, response: Result<ScanVerdict, ScanError>) {
        self.responses
            .lock()
            .expect("mock response queue poisoned")
            .push_back(response);
    }

    /// Returns the number of `send` calls observed.
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::Relaxed)
    }

    /// Returns clones of every request seen, in call order.
    pub fn requests(&self) -> Vec<ScanRequest> {
        self.seen.lock().expect("mock request log poisoned").clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScanTransport for MockTransport {
    async fn send(&self, request: &ScanRequest) -> Result<ScanVerdict, ScanError> {
        self.send_count.fetch_add(1, Ordering::Relaxed);
        self.seen
            .lock()
            .expect("mock request log poisoned")
            .push(request.clone());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let scripted = self
            .responses
            .lock()
            .expect("mock response queue poisoned")
            .pop_front();

        match scripted {
            Some(response) => response,
            None => Ok(self.default_verdict.clone()),
        }
    }
}
