use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::api::{
    ClassList, ClassifierApi, HealthStatus, ImageFile, PredictionResult, RequestError,
    RetrainError, RetrainOutcome, ServiceStats,
};

use super::preview::{PreviewError, decode_preview};

pub(crate) enum JobMessage {
    PreviewDecoded(PreviewJobResult),
    Predicted(PredictJobResult),
    Retrained(RetrainJobResult),
    ServiceInfo(ServiceInfoResult),
}

#[derive(Debug)]
pub(crate) struct PreviewJobResult {
    pub(crate) attempt: u64,
    pub(crate) file_name: String,
    pub(crate) result: Result<egui::ColorImage, PreviewError>,
}

#[derive(Debug)]
pub(crate) struct PredictJobResult {
    pub(crate) attempt: u64,
    pub(crate) file_name: String,
    pub(crate) result: Result<PredictionResult, RequestError>,
}

#[derive(Debug)]
pub(crate) struct RetrainJobResult {
    pub(crate) file_count: usize,
    pub(crate) result: Result<RetrainOutcome, RetrainError>,
}

#[derive(Debug)]
pub(crate) struct ServiceInfoResult {
    pub(crate) health: Result<HealthStatus, RequestError>,
    pub(crate) stats: Result<ServiceStats, RequestError>,
    pub(crate) classes: Result<ClassList, RequestError>,
}

/// Worker threads and the channel they report on.
///
/// Every spawned worker sends exactly one message, which keeps `in_flight`
/// accurate without join handles.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    in_flight: usize,
    retrain_in_progress: bool,
    service_info_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            in_flight: 0,
            retrain_in_progress: false,
            service_info_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&mut self) -> Result<JobMessage, TryRecvError> {
        let message = self.message_rx.try_recv()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Ok(message)
    }

    #[cfg(test)]
    pub(super) fn message_sender(&mut self) -> Sender<JobMessage> {
        self.in_flight += 1;
        self.message_tx.clone()
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn spawn(&mut self, work: impl FnOnce() -> JobMessage + Send + 'static) {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(work());
        });
    }

    pub(super) fn begin_preview(&mut self, attempt: u64, image: ImageFile) {
        self.spawn(move || {
            JobMessage::PreviewDecoded(PreviewJobResult {
                attempt,
                result: decode_preview(&image.bytes),
                file_name: image.file_name,
            })
        });
    }

    pub(super) fn begin_predict(
        &mut self,
        api: Arc<dyn ClassifierApi>,
        attempt: u64,
        image: ImageFile,
    ) {
        self.spawn(move || {
            JobMessage::Predicted(PredictJobResult {
                attempt,
                result: api.predict_waste(&image),
                file_name: image.file_name,
            })
        });
    }

    pub(super) fn retrain_in_progress(&self) -> bool {
        self.retrain_in_progress
    }

    pub(super) fn begin_retrain(&mut self, api: Arc<dyn ClassifierApi>, images: Vec<ImageFile>) {
        if self.retrain_in_progress {
            return;
        }
        self.retrain_in_progress = true;
        self.spawn(move || {
            JobMessage::Retrained(RetrainJobResult {
                file_count: images.len(),
                result: api.retrain_upload(&images),
            })
        });
    }

    pub(super) fn clear_retrain(&mut self) {
        self.retrain_in_progress = false;
    }

    pub(super) fn begin_service_info(&mut self, api: Arc<dyn ClassifierApi>) -> bool {
        if self.service_info_in_progress {
            return false;
        }
        self.service_info_in_progress = true;
        self.spawn(move || {
            JobMessage::ServiceInfo(ServiceInfoResult {
                health: api.get_health(),
                stats: api.get_stats(),
                classes: api.get_classes(),
            })
        });
        true
    }

    pub(super) fn clear_service_info(&mut self) {
        self.service_info_in_progress = false;
    }
}
