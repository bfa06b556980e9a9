//! Backend verdict structures.
//!
//! This module defines `ScanVerdict`, the typed form of the analysis
//! service's JSON response, along with the severity bucketing the
//! presentation layer uses to color a verdict.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The backend's structured judgment on one media input.
///
/// At most one of the two probability fields is meaningful per media
/// type: image and video verdicts carry `deepfake_probability`, audio
/// verdicts carry `voice_clone_probability`. Consumers should read
/// [`ScanVerdict::effective_probability`] rather than picking a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanVerdict {
    /// Backend status string (e.g. `"ok"`).
    pub status: String,

    /// Probability that the visual content is synthetic, in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deepfake_probability: Option<f64>,

    /// Probability that the voice is cloned, in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_clone_probability: Option<f64>,

    /// Media type the backend detected (e.g. `"image"`, `"audio"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Per-model probability breakdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_breakdown: Option<HashMap<String, f64>>,

    /// Legacy per-model breakdown field used by older backend versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, f64>>,
}

impl ScanVerdict {
    /// Creates a verdict with the given status and no probabilities.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            deepfake_probability: None,
            voice_clone_probability: None,
            media_type: None,
            model_breakdown: None,
            details: None,
        }
    }

    /// Returns the single effective probability for this verdict:
    /// deepfake probability if present, else voice-clone probability,
    /// else `0.0`.
    pub fn effective_probability(&self) -> f64 {
        self.deepfake_probability
            .or(self.voice_clone_probability)
            .unwrap_or(0.0)
    }

    /// Returns the severity bucket for the effective probability.
    pub fn severity(&self) -> Severity {
        Severity::from_probability(self.effective_probability())
    }

    /// Returns the per-model breakdown, preferring `model_breakdown` and
    /// falling back to the legacy `details` field.
    pub fn breakdown(&self) -> Option<&HashMap<String, f64>> {
        self.model_breakdown.as_ref().or(self.details.as_ref())
    }
}

/// Severity bucket for an effective probability.
///
/// Thresholds match the presentation contract: up to and including 0.4
/// is safe, up to and including 0.7 is suspicious, above that is danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The media is likely authentic.
    Safe,
    /// The media shows manipulation indicators.
    Suspicious,
    /// The media is likely synthetic.
    Danger,
}

impl Severity {
    /// Buckets a probability in `[0, 1]`.
    pub fn from_probability(probability: f64) -> Self {
        if probability <= 0.4 {
            Self::Safe
        } else if probability <= 0.7 {
            Self::Suspicious
        } else {
            Self::Danger
        }
    }

    /// Returns the user-facing label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Likely Authentic",
            Self::Suspicious => "Suspicious",
            Self::Danger => "Likely Deepfake",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Suspicious => write!(f, "suspicious"),
            Self::Danger => write!(f, "danger"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_probability_prefers_deepfake() {
        let mut verdict = ScanVerdict::with_status("ok");
        verdict.deepfake_probability = Some(0.82);
        verdict.voice_clone_probability = Some(0.1);
        assert_eq!(verdict.effective_probability(), 0.82);
    }

    #[test]
    fn test_effective_probability_falls_back_to_voice_clone() {
        let mut verdict = ScanVerdict::with_status("ok");
        verdict.voice_clone_probability = Some(0.33);
        assert_eq!(verdict.effective_probability(), 0.33);
    }

    #[test]
    fn test_effective_probability_defaults_to_zero() {
        let verdict = ScanVerdict::with_status("ok");
        assert_eq!(verdict.effective_probability(), 0.0);
        assert_eq!(verdict.severity(), Severity::Safe);
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_probability(0.4), Severity::Safe);
        assert_eq!(Severity::from_probability(0.41), Severity::Suspicious);
        assert_eq!(Severity::from_probability(0.7), Severity::Suspicious);
        assert_eq!(Severity::from_probability(0.71), Severity::Danger);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Safe.label(), "Likely Authentic");
        assert_eq!(Severity::Suspicious.label(), "Suspicious");
        assert_eq!(Severity::Danger.label(), "Likely Deepfake");
    }

    #[test]
    fn test_breakdown_prefers_model_breakdown() {
        let mut verdict = ScanVerdict::with_status("ok");
        verdict.details = Some(HashMap::from([("legacy".to_string(), 0.2)]));
        assert!(verdict.breakdown().unwrap().contains_key("legacy"));

        verdict.model_breakdown = Some(HashMap::from([("cnn".to_string(), 0.9)]));
        assert!(verdict.breakdown().unwrap().contains_key("cnn"));
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let verdict: ScanVerdict = serde_json::from_str(
            r#"{
                "status": "ok",
                "deepfake_probability": 0.82,
                "media_type": "video",
                "model_breakdown": {"frame_model": 0.85, "audio_model": 0.4}
            }"#,
        )
        .unwrap();

        assert_eq!(verdict.status, "ok");
        assert_eq!(verdict.effective_probability(), 0.82);
        assert_eq!(verdict.severity(), Severity::Danger);
        assert_eq!(verdict.media_type.as_deref(), Some("video"));
        assert_eq!(verdict.breakdown().unwrap().len(), 2);
    }

    #[test]
    fn test_deserializes_minimal_response() {
        let verdict: ScanVerdict = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(verdict.effective_probability(), 0.0);
        assert!(verdict.breakdown().is_none());
    }
}
