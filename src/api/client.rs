use serde::de::DeserializeOwned;

use super::error::{RequestError, RetrainError};
use super::multipart::MultipartForm;
use super::types::{
    ClassList, HealthStatus, PredictionResult, RetrainOutcome, RetrainResponseWire, ServiceStats,
};
use super::ImageFile;
use crate::config::ApiSettings;
use crate::http_client::{self, HttpTimeouts};

/// Base URL of the hosted classification service.
pub const DEFAULT_BASE_URL: &str = "https://realwaste-classifier-production.up.railway.app";

const PREDICT: &str = "predict";
const RETRAIN: &str = "retrain";
const HEALTH: &str = "health";
const CLASSES: &str = "classes";
const STATS: &str = "stats";

const PREDICT_FIELD: &str = "image";
const RETRAIN_FIELD: &str = "images";

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Operations the UI needs from the classification service.
///
/// Each call is a single blocking attempt: no retry, no backoff, no cancellation.
pub trait ClassifierApi: Send + Sync {
    /// Classify one image.
    fn predict_waste(&self, image: &ImageFile) -> Result<PredictionResult, RequestError>;
    /// Upload images for offline retraining.
    fn retrain_upload(&self, images: &[ImageFile]) -> Result<RetrainOutcome, RetrainError>;
    /// Fetch the service health payload.
    fn get_health(&self) -> Result<HealthStatus, RequestError>;
    /// Fetch the category keys the model was trained on.
    fn get_classes(&self) -> Result<ClassList, RequestError>;
    /// Fetch request and latency statistics.
    fn get_stats(&self) -> Result<ServiceStats, RequestError>;
}

/// HTTP implementation of [`ClassifierApi`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiClient {
    /// Client for `base_url` with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, HttpTimeouts::default())
    }

    /// Client configured from persisted settings.
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self::with_timeouts(settings.base_url.clone(), settings.timeouts())
    }

    pub(crate) fn with_timeouts(base_url: impl Into<String>, timeouts: HttpTimeouts) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            agent: http_client::build_agent(timeouts),
        }
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, RequestError> {
        let result = self
            .agent
            .get(&self.url(endpoint))
            .set("Accept", "application/json")
            .call();
        let response = expect_success(endpoint, result)?;
        parse_json(endpoint, response)
    }

    fn post_form(
        &self,
        endpoint: &'static str,
        form: MultipartForm,
    ) -> Result<ureq::Response, ureq::Error> {
        let (content_type, body) = form.finish();
        tracing::debug!(endpoint, bytes = body.len(), "Sending multipart upload");
        self.agent
            .post(&self.url(endpoint))
            .set("Accept", "application/json")
            .set("Content-Type", &content_type)
            .send_bytes(&body)
    }
}

impl ClassifierApi for ApiClient {
    fn predict_waste(&self, image: &ImageFile) -> Result<PredictionResult, RequestError> {
        let mut form = MultipartForm::new();
        form.add_file(PREDICT_FIELD, image);
        let response = expect_success(PREDICT, self.post_form(PREDICT, form))?;
        parse_json(PREDICT, response)
    }

    fn retrain_upload(&self, images: &[ImageFile]) -> Result<RetrainOutcome, RetrainError> {
        if images.is_empty() {
            return Err(RetrainError::NoImages);
        }
        let mut form = MultipartForm::new();
        for image in images {
            form.add_file(RETRAIN_FIELD, image);
        }
        let response = match self.post_form(RETRAIN, form) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                // Error statuses may still carry a `{success: false, error}` envelope.
                return match parse_json::<RetrainResponseWire>(RETRAIN, response) {
                    Ok(wire) => Ok(wire.into()),
                    Err(_) => Err(RequestError::Status {
                        endpoint: RETRAIN,
                        status,
                    }
                    .into()),
                };
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(RequestError::Transport {
                    endpoint: RETRAIN,
                    message: err.to_string(),
                }
                .into());
            }
        };
        let wire: RetrainResponseWire = parse_json(RETRAIN, response)?;
        Ok(wire.into())
    }

    fn get_health(&self) -> Result<HealthStatus, RequestError> {
        self.get_json(HEALTH)
    }

    fn get_classes(&self) -> Result<ClassList, RequestError> {
        self.get_json(CLASSES)
    }

    fn get_stats(&self) -> Result<ServiceStats, RequestError> {
        self.get_json(STATS)
    }
}

fn expect_success(
    endpoint: &'static str,
    result: Result<ureq::Response, ureq::Error>,
) -> Result<ureq::Response, RequestError> {
    match result {
        Ok(response) if (200..300).contains(&response.status()) => Ok(response),
        Ok(response) => Err(RequestError::Status {
            endpoint,
            status: response.status(),
        }),
        Err(ureq::Error::Status(status, _)) => Err(RequestError::Status { endpoint, status }),
        Err(ureq::Error::Transport(err)) => Err(RequestError::Transport {
            endpoint,
            message: err.to_string(),
        }),
    }
}

fn parse_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: ureq::Response,
) -> Result<T, RequestError> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES).map_err(|err| {
        RequestError::InvalidResponse {
            endpoint,
            message: err.to_string(),
        }
    })?;
    serde_json::from_slice(&bytes).map_err(|err| RequestError::InvalidResponse {
        endpoint,
        message: err.to_string(),
    })
}
