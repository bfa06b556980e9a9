//! HTTP transport for the DeepGuard analysis backend.
//!
//! This module provides the real [`ScanTransport`] implementation: it
//! maps each scan kind to its backend endpoint, encodes the payload as a
//! URL query or a single-part multipart body, and turns the raw response
//! into a typed verdict or a classified error.
//!
//! # Endpoints
//!
//! | Kind  | Request                                        |
//! |-------|------------------------------------------------|
//! | Link  | `POST {base}/link/scan?url=<encoded>`, no body |
//! | Image | `POST {base}/image/scan`, multipart `file`     |
//! | Video | `POST {base}/video/scan`, multipart `file`     |
//! | Audio | `POST {base}/audio/scan`, multipart `file`     |

use crate::core::{
    MediaFile, ScanError, ScanKind, ScanPayload, ScanRequest, ScanTransport, ScanVerdict,
};
use crate::transport::classify;

use async_trait::async_trait;
use reqwest::multipart;
use std::time::Duration;

/// Default base address of the analysis backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Base address of the backend.
    pub base_url: String,

    /// Optional overall request timeout.
    ///
    /// `None` (the default) enforces no timeout at this layer; the
    /// caller owns cancellation semantics.
    pub timeout: Option<Duration>,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl HttpTransportConfig {
    /// Creates a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base address.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets an overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The reqwest-backed scan transport.
///
/// # Example
///
/// ```rust,no_run
/// use deepguard::transport::{HttpTransport, HttpTransportConfig};
///
/// let config = HttpTransportConfig::new().with_base_url("http://analysis.internal:8000");
/// let transport = HttpTransport::with_config(config).unwrap();
/// # let _ = transport;
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    config: HttpTransportConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport pointed at the default backend address.
    pub fn new() -> Result<Self, ScanError> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Creates a transport with the given configuration.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self, ScanError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScanError::unknown(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Returns the configured backend base address.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, kind: ScanKind) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            kind.endpoint_path()
        )
    }

    async fn upload_form(&self, file: &MediaFile) -> Result<multipart::Form, ScanError> {
        let filename = file
            .filename()
            .ok_or_else(|| ScanError::unknown("file payload has no name"))?
            .to_string();
        let data = file.contents().await.map_err(|e| {
            ScanError::unknown(format!("failed to read '{filename}': {e}"))
        })?;

        tracing::debug!(
            filename = %filename,
            size = data.len(),
            "encoding multipart upload"
        );

        let part = multipart::Part::bytes(data).file_name(filename);
        Ok(multipart::Form::new().part("file", part))
    }
}

#[async_trait]
impl ScanTransport for HttpTransport {
    async fn send(&self, request: &ScanRequest) -> Result<ScanVerdict, ScanError> {
        let endpoint = self.endpoint(request.kind());

        let outcome = match request.payload() {
            ScanPayload::Url(url) => {
                tracing::debug!(endpoint = %endpoint, url = %url, "sending link scan");
                self.client
                    .post(&endpoint)
                    .query(&[("url", url.as_str())])
                    .send()
                    .await
            }
            ScanPayload::File(file) => {
                let form = self.upload_form(file).await?;
                tracing::debug!(endpoint = %endpoint, "sending upload scan");
                self.client.post(&endpoint).multipart(form).send().await
            }
        };

        let response = outcome.map_err(classify::classify)?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                "backend returned failure status"
            );
            return Err(classify::status_error(status));
        }

        response.json::<ScanVerdict>().await.map_err(classify::classify)
    }
}
