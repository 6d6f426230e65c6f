use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Classification returned by `POST /predict`.
///
/// The shape is trusted as-is once the HTTP status is successful.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Category key of the top prediction.
    pub predicted_class: String,
    /// Confidence of the top prediction, in percent (0-100).
    pub confidence_percent: f64,
    /// Probability (0-1) for every category the model knows.
    pub all_predictions: BTreeMap<String, f64>,
    /// Server-side processing time in milliseconds.
    pub latency_ms: f64,
    /// Raw top-prediction probability, when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Server timestamp (ISO 8601), when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Parsed envelope of `POST /retrain`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RetrainOutcome {
    /// The service stored the uploaded images.
    Accepted { images_received: u64 },
    /// The service declined the upload and explained why.
    Rejected { error: String },
}

#[derive(Debug, Deserialize)]
pub(super) struct RetrainResponseWire {
    #[serde(default)]
    success: bool,
    images_received: Option<u64>,
    error: Option<String>,
    message: Option<String>,
}

impl From<RetrainResponseWire> for RetrainOutcome {
    fn from(wire: RetrainResponseWire) -> Self {
        if wire.success {
            return Self::Accepted {
                images_received: wire.images_received.unwrap_or(0),
            };
        }
        let error = wire
            .error
            .or(wire.message)
            .unwrap_or_else(|| "Retrain upload was rejected".to_string());
        Self::Rejected { error }
    }
}

/// Payload of `GET /health`.
///
/// Every field is optional; the service does not promise a shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uptime_seconds: Option<f64>,
    #[serde(default)]
    pub total_requests: Option<u64>,
    #[serde(default)]
    pub average_prediction_time_ms: Option<f64>,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    /// Short label for the diagnostics window.
    pub fn summary(&self) -> String {
        let status = self.status.as_deref().unwrap_or("unknown");
        match self.model_loaded {
            Some(true) => format!("{status} (model loaded)"),
            Some(false) => format!("{status} (model not loaded)"),
            None => status.to_string(),
        }
    }
}

/// Payload of `GET /classes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    pub classes: Vec<String>,
    #[serde(default)]
    pub num_classes: usize,
}

/// Payload of `GET /stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub uptime_hours: f64,
    #[serde(default)]
    pub predictions: PredictionStats,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Rolling latency figures reported by `GET /stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionStats {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub average_latency_ms: f64,
    #[serde(default)]
    pub min_latency_ms: f64,
    #[serde(default)]
    pub max_latency_ms: f64,
}
