use std::path::PathBuf;
use std::time::Instant;

use rfd::FileDialog;
use tracing::{error, info, warn};

use super::jobs::RetrainJobResult;
use super::*;
use crate::api::{ImageFile, RetrainError, RetrainOutcome, SUPPORTED_EXTENSIONS};

/// Banner text used when the service answers without an error description.
const RETRAIN_FALLBACK_ERROR: &str = "Upload failed";

impl EguiController {
    /// Show or hide the retrain panel.
    pub fn toggle_retrain_panel(&mut self) {
        let retrain = &mut self.ui.retrain;
        retrain.visible = !retrain.visible;
        if !retrain.visible {
            retrain.message = None;
            retrain.hide_at = None;
        }
    }

    /// Upload `images` as retraining data.
    ///
    /// Does nothing for an empty selection or while an upload is in flight.
    pub fn submit_retrain(&mut self, images: Vec<ImageFile>) {
        if images.is_empty() || self.ui.retrain.submitting || self.jobs.retrain_in_progress() {
            return;
        }
        info!(count = images.len(), "Uploading images for retraining");
        self.ui.retrain.submitting = true;
        self.ui.retrain.message = None;
        self.ui.retrain.hide_at = None;
        self.set_status(
            format!("Uploading {} image(s) for retraining", images.len()),
            StatusTone::Busy,
        );
        self.jobs.begin_retrain(self.api.clone(), images);
    }

    /// Read the given paths and upload the supported ones for retraining.
    pub fn submit_retrain_paths(&mut self, paths: &[PathBuf]) {
        let images: Vec<ImageFile> = paths
            .iter()
            .filter_map(|path| {
                ImageFile::from_path(path)
                    .inspect_err(|err| warn!(error = %err, "Skipping retrain file"))
                    .ok()
            })
            .collect();
        self.submit_retrain(images);
    }

    /// Open a multi-select picker and upload the chosen images.
    pub fn pick_retrain_files_via_dialog(&mut self) {
        if self.ui.retrain.submitting {
            return;
        }
        let Some(paths) = FileDialog::new()
            .add_filter("Images", &SUPPORTED_EXTENSIONS)
            .pick_files()
        else {
            return;
        };
        self.submit_retrain_paths(&paths);
    }

    /// Hide the retrain panel once its result banner has been shown long enough.
    pub fn tick(&mut self, now: Instant) {
        let retrain = &mut self.ui.retrain;
        let Some(hide_at) = retrain.hide_at else {
            return;
        };
        if now >= hide_at {
            retrain.visible = false;
            retrain.message = None;
            retrain.hide_at = None;
        }
    }

    pub(super) fn apply_retrain_result(&mut self, message: RetrainJobResult) {
        self.ui.retrain.submitting = false;
        let (text, success) = match message.result {
            Ok(RetrainOutcome::Accepted { images_received }) => {
                info!(images_received, "Retrain upload accepted");
                (
                    format!("Uploaded {images_received} image(s) for retraining"),
                    true,
                )
            }
            Ok(RetrainOutcome::Rejected { error }) => {
                warn!(count = message.file_count, error = %error, "Retrain upload rejected");
                let text = if error.trim().is_empty() {
                    RETRAIN_FALLBACK_ERROR.to_string()
                } else {
                    error
                };
                (text, false)
            }
            Err(RetrainError::NoImages) => return,
            Err(RetrainError::Request(err)) => {
                error!(count = message.file_count, error = %err, "Retrain upload failed");
                (err.to_string(), false)
            }
        };
        let tone = if success {
            StatusTone::Info
        } else {
            StatusTone::Error
        };
        self.set_status(text.clone(), tone);
        self.ui.retrain.message = Some(RetrainMessage { text, success });
        self.ui.retrain.hide_at = Some(Instant::now() + self.settings.retrain.status_display());
    }
}
