use super::*;
use crate::api::{
    ClassList, HealthStatus, ImageFile, PredictionResult, RequestError, RetrainError,
    RetrainOutcome, ServiceStats,
};
use std::collections::{BTreeMap, VecDeque};
use std::io::Cursor;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Scripted service double; each call pops the next queued response.
#[derive(Default)]
pub(super) struct FakeApi {
    predictions: Mutex<VecDeque<Result<PredictionResult, RequestError>>>,
    retrains: Mutex<VecDeque<Result<RetrainOutcome, RetrainError>>>,
    health: Mutex<Option<HealthStatus>>,
    pub(super) predict_calls: AtomicUsize,
    pub(super) retrain_calls: AtomicUsize,
    pub(super) retrain_sizes: Mutex<Vec<usize>>,
}

impl FakeApi {
    pub(super) fn push_prediction(&self, result: Result<PredictionResult, RequestError>) {
        self.predictions.lock().unwrap().push_back(result);
    }

    pub(super) fn push_retrain(&self, result: Result<RetrainOutcome, RetrainError>) {
        self.retrains.lock().unwrap().push_back(result);
    }

    pub(super) fn set_health(&self, health: HealthStatus) {
        *self.health.lock().unwrap() = Some(health);
    }

    pub(super) fn predict_count(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub(super) fn retrain_count(&self) -> usize {
        self.retrain_calls.load(Ordering::SeqCst)
    }
}

fn unavailable(endpoint: &'static str) -> RequestError {
    RequestError::Status {
        endpoint,
        status: 503,
    }
}

impl ClassifierApi for FakeApi {
    fn predict_waste(&self, _image: &ImageFile) -> Result<PredictionResult, RequestError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.predictions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable("predict")))
    }

    fn retrain_upload(&self, images: &[ImageFile]) -> Result<RetrainOutcome, RetrainError> {
        self.retrain_calls.fetch_add(1, Ordering::SeqCst);
        self.retrain_sizes.lock().unwrap().push(images.len());
        self.retrains
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable("retrain").into()))
    }

    fn get_health(&self) -> Result<HealthStatus, RequestError> {
        self.health
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| unavailable("health"))
    }

    fn get_classes(&self) -> Result<ClassList, RequestError> {
        Ok(ClassList {
            classes: vec!["Glass".into(), "Metal".into()],
            num_classes: 2,
        })
    }

    fn get_stats(&self) -> Result<ServiceStats, RequestError> {
        Err(unavailable("stats"))
    }
}

pub(super) fn controller_with(api: Arc<FakeApi>) -> EguiController {
    EguiController::new(api, AppSettings::default())
}

pub(super) fn prediction(class: &str, confidence_percent: f64) -> PredictionResult {
    let mut all_predictions = BTreeMap::new();
    all_predictions.insert(class.to_string(), confidence_percent / 100.0);
    all_predictions.insert("Paper".to_string(), 0.05);
    PredictionResult {
        predicted_class: class.to_string(),
        confidence_percent,
        all_predictions,
        latency_ms: 128.6,
        confidence: Some(confidence_percent / 100.0),
        timestamp: None,
    }
}

pub(super) fn png_image(name: &str) -> ImageFile {
    let pixels = image::RgbaImage::from_pixel(4, 4, image::Rgba([34, 197, 94, 255]));
    let mut bytes = Cursor::new(Vec::new());
    pixels
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    ImageFile::from_bytes(name, bytes.into_inner()).unwrap()
}

/// Poll until every worker has reported back.
pub(super) fn wait_for_jobs(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if !controller.has_pending_jobs() {
            return;
        }
        assert!(Instant::now() < deadline, "background jobs did not finish");
        std::thread::sleep(Duration::from_millis(5));
    }
}
