use std::path::Path;

use rfd::FileDialog;
use tracing::{debug, error, info, warn};

use super::jobs::{PredictJobResult, PreviewJobResult};
use super::*;
use crate::api::{ImageFile, SUPPORTED_EXTENSIONS, is_supported_image_name};
use crate::waste_info::get_waste_info;

impl EguiController {
    /// Start classifying `image`: preview decoding and the predict call run concurrently.
    ///
    /// Any previous prediction, preview and error are cleared first.
    pub fn select_image(&mut self, image: ImageFile) {
        let attempt = self.next_attempt();
        self.ui.error = None;
        self.ui.prediction = None;
        self.ui.preview = None;
        self.ui.loading = true;
        info!(
            attempt,
            file = %image.file_name,
            bytes = image.len(),
            "Submitting image for classification"
        );
        self.set_status(format!("Analyzing {}", image.file_name), StatusTone::Busy);
        self.jobs.begin_preview(attempt, image.clone());
        self.jobs.begin_predict(self.api.clone(), attempt, image);
    }

    /// Read an image from disk and classify it.
    pub fn select_image_from_path(&mut self, path: &Path) {
        match ImageFile::from_path(path) {
            Ok(image) => self.select_image(image),
            Err(err) => {
                warn!(error = %err, "Ignoring selected file");
                self.set_status(err.to_string(), StatusTone::Warning);
            }
        }
    }

    /// Open the file picker and classify the chosen image.
    pub fn select_image_via_dialog(&mut self) {
        if self.ui.loading {
            return;
        }
        let Some(path) = FileDialog::new()
            .add_filter("Images", &SUPPORTED_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        self.select_image_from_path(&path);
    }

    /// Classify the first supported file dropped on the window.
    ///
    /// Drops are only accepted while the uploader is on screen; unsupported
    /// files are skipped without feedback.
    pub fn accept_dropped_files(&mut self, files: &[egui::DroppedFile]) {
        if files.is_empty() || self.phase() != ViewPhase::Idle {
            return;
        }
        let Some(image) = files.iter().find_map(dropped_image) else {
            debug!(count = files.len(), "No supported image among dropped files");
            return;
        };
        self.select_image(image);
    }

    /// Clear the preview, prediction and error and return to the uploader.
    pub fn reset(&mut self) {
        self.next_attempt();
        self.ui.preview = None;
        self.ui.prediction = None;
        self.ui.error = None;
        self.ui.loading = false;
        self.ui.status = StatusBarState::idle();
    }

    pub(super) fn apply_prediction(&mut self, message: PredictJobResult) {
        if message.attempt != self.attempt {
            debug!(
                attempt = message.attempt,
                current = self.attempt,
                "Discarding stale prediction"
            );
            return;
        }
        self.ui.loading = false;
        match message.result {
            Ok(prediction) => {
                let info = get_waste_info(&prediction.predicted_class);
                info!(
                    file = %message.file_name,
                    class = %prediction.predicted_class,
                    confidence = prediction.confidence_percent,
                    latency_ms = prediction.latency_ms,
                    "Prediction received"
                );
                self.ui.error = None;
                self.set_status(
                    format!("{} classified as {}", message.file_name, info.name),
                    StatusTone::Info,
                );
                self.ui.prediction = Some(prediction);
            }
            Err(err) => {
                error!(file = %message.file_name, error = %err, "Prediction failed");
                self.ui.prediction = None;
                self.ui.preview = None;
                self.ui.error = Some(PREDICT_ERROR_MESSAGE.to_string());
                self.set_status("Prediction failed", StatusTone::Error);
            }
        }
    }

    pub(super) fn apply_preview(&mut self, message: PreviewJobResult) {
        let current = message.attempt == self.attempt
            && (self.ui.loading || self.ui.prediction.is_some());
        if !current {
            debug!(attempt = message.attempt, "Discarding stale preview");
            return;
        }
        match message.result {
            Ok(image) => {
                self.ui.preview = Some(PreviewImage {
                    attempt: message.attempt,
                    file_name: message.file_name,
                    image,
                });
            }
            Err(err) => warn!(file = %message.file_name, error = %err, "Preview unavailable"),
        }
    }
}

fn dropped_image(file: &egui::DroppedFile) -> Option<ImageFile> {
    if let Some(path) = file.path.as_deref() {
        let name = path.file_name()?.to_string_lossy();
        if !is_supported_image_name(&name) {
            return None;
        }
        return ImageFile::from_path(path)
            .inspect_err(|err| warn!(error = %err, "Dropped file could not be read"))
            .ok();
    }
    let bytes = file.bytes.clone()?;
    ImageFile::from_bytes(file.name.clone(), bytes).ok()
}
